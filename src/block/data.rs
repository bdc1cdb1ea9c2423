//! The Block type - one fixed-size unit of content handed to a scan.

use bytes::Bytes;
use std::fmt;

use super::OwnerId;

/// A snapshot of one block's bytes together with its owner.
///
/// The enumeration side decides which blocks exist and who owns them; a
/// `Block` is what it hands over. Cloning is cheap since the data is `Bytes`.
///
/// # Example
///
/// ```
/// use pagededup::{Block, OwnerId};
/// use bytes::Bytes;
///
/// let block = Block::owned_by(Bytes::from_static(&[0u8; 4096]), OwnerId::new(1));
///
/// assert_eq!(block.len(), 4096);
/// assert!(block.is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct Block {
    /// The block contents.
    pub data: Bytes,

    /// The owner of the block, `None` for free or unassigned blocks.
    pub owner: Option<OwnerId>,
}

impl Block {
    /// Creates a block with no owner.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            owner: None,
        }
    }

    /// Creates a block held by `owner`.
    pub fn owned_by(data: impl Into<Bytes>, owner: OwnerId) -> Self {
        Self {
            data: data.into(),
            owner: Some(owner),
        }
    }

    /// Sets the owner.
    pub fn set_owner(mut self, owner: OwnerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Returns the length of the block data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the block has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if every byte of the block is zero.
    pub fn is_zero(&self) -> bool {
        crate::util::is_zero_block(&self.data)
    }

    /// Returns a reference to the block data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the owner, if any.
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// Consumes the block and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl From<Bytes> for Block {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Block {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({} bytes", self.len())?;
        match self.owner {
            Some(owner) => write!(f, ", {}", owner)?,
            None => write!(f, ", unowned")?,
        }
        write!(f, ")")
    }
}
