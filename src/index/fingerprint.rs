//! Block classification.

use crate::block::Digest;
use crate::hash::digest_of;
use crate::util::is_zero_block;

/// The classification of one block's contents.
///
/// Computing a fingerprint is pure, so it can run on any thread; only
/// recording it into a [`DedupIndex`](super::DedupIndex) needs exclusive access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    /// Every byte is zero. No digest is computed.
    Zero,

    /// Non-zero content with its digest.
    Content(Digest),
}

impl Fingerprint {
    /// Classifies `block`, hashing it only when it holds non-zero bytes.
    pub fn of(block: &[u8]) -> Self {
        if is_zero_block(block) {
            Fingerprint::Zero
        } else {
            Fingerprint::Content(digest_of(block))
        }
    }

    /// Returns the digest for content blocks.
    pub fn digest(&self) -> Option<Digest> {
        match self {
            Fingerprint::Zero => None,
            Fingerprint::Content(digest) => Some(*digest),
        }
    }
}
