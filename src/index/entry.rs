//! One distinct digest and its observation history.

use crate::block::{Digest, OwnerId};

/// A record of one distinct non-zero digest.
///
/// The digest and the first owner are fixed at creation. The count only
/// grows and the cross-owner flag only goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupEntry {
    digest: Digest,
    count: u64,
    first_owner: OwnerId,
    flagged: bool,
}

impl DedupEntry {
    pub(crate) fn new(digest: Digest, owner: OwnerId) -> Self {
        Self {
            digest,
            count: 1,
            first_owner: owner,
            flagged: false,
        }
    }

    /// Counts one more occurrence.
    pub(crate) fn bump(&mut self) {
        self.count += 1;
    }

    /// Sets the cross-owner flag. Returns true if it was not set before.
    pub(crate) fn flag(&mut self) -> bool {
        !std::mem::replace(&mut self.flagged, true)
    }

    /// The content digest.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// How many blocks with this digest were observed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The owner of the first block with this digest.
    pub fn first_owner(&self) -> OwnerId {
        self.first_owner
    }

    /// Whether a block with this digest was seen under a different owner.
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}
