//! Error types for pagededup.

use std::fmt;

/// Errors that can occur while indexing blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedupError {
    /// A new distinct digest arrived while the index was already full.
    ///
    /// The index was sized too small for the scan. The scan must be
    /// aborted; nothing was inserted or overwritten.
    CapacityExhausted {
        /// The fixed capacity of the index.
        capacity: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for DedupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupError::CapacityExhausted { capacity } => {
                write!(f, "dedup index full: {} distinct digests", capacity)
            }
            DedupError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for DedupError {}
