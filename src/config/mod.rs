//! Configuration for scan sessions.
//!
//! - [`ScanConfig`] - Index capacity and the owner filter
//!
//! # Example
//!
//! ```
//! use pagededup::{OwnerId, ScanConfig};
//!
//! // Custom capacity
//! let config = ScanConfig::new(65536)?;
//!
//! // Skip reserved owners
//! let config = ScanConfig::default().with_max_owner(OwnerId::new(0x7fef));
//!
//! # Ok::<(), pagededup::DedupError>(())
//! ```

use crate::block::OwnerId;
use crate::error::DedupError;

/// Default index capacity (distinct digests).
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// Default block size (one 4 KiB page).
pub const DEFAULT_BLOCK_SIZE: usize = 4 * 1024;

/// Configuration for a scan session.
///
/// `capacity` bounds the number of distinct non-zero digests the index can
/// hold. It is allocated up front and never grown, so it must cover the
/// expected number of distinct blocks.
///
/// `max_owner`, when set, excludes blocks whose owner id is greater than it.
/// Such blocks are counted but never reach the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Maximum number of distinct digests.
    capacity: usize,

    /// Largest owner id that is tracked.
    max_owner: Option<OwnerId>,
}

impl ScanConfig {
    /// Creates a new configuration with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::InvalidConfig`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, DedupError> {
        if capacity == 0 {
            return Err(DedupError::InvalidConfig {
                message: "capacity must be non-zero",
            });
        }

        Ok(Self {
            capacity,
            max_owner: None,
        })
    }

    /// Sets the capacity.
    ///
    /// Note: This does not validate the configuration. Use [`ScanConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Skips owners whose id is greater than `max_owner`.
    pub fn with_max_owner(mut self, max_owner: OwnerId) -> Self {
        self.max_owner = Some(max_owner);
        self
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the owner limit, if any.
    pub fn max_owner(&self) -> Option<OwnerId> {
        self.max_owner
    }

    /// Returns true if blocks held by `owner` should be indexed.
    pub fn tracks(&self, owner: OwnerId) -> bool {
        self.max_owner.is_none_or(|max| owner <= max)
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use pagededup::ScanConfig;
    ///
    /// let config = ScanConfig::default().with_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DedupError> {
        Self::new(self.capacity).map(|_| ())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_owner: None,
        }
    }
}
