//! Owner identifiers.

use std::fmt;

/// Identifier of the entity that holds a block (a domain, a process, ...).
///
/// Blocks without an owner are represented as `Option<OwnerId>::None` at the
/// scan boundary and never reach the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(u32);

impl OwnerId {
    /// Creates an owner identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for OwnerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owner#{}", self.0)
    }
}
