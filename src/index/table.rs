//! The dedup table and its counters.

use std::collections::HashMap;
use std::fmt;

use crate::block::{Digest, OwnerId};
use crate::error::DedupError;

use super::{DedupEntry, Fingerprint};

/// What a single [`DedupIndex::observe`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The block was all zeros and only counted.
    ZeroBlock,

    /// First time this digest was seen; a new entry was created.
    NewDigest,

    /// Known digest, seen again under its first owner.
    Duplicate,

    /// Known digest, seen under a different owner than the first one.
    CrossOwnerMatch {
        /// True if this match flagged the entry for the first time.
        first_for_entry: bool,
    },
}

/// Read-only snapshot of the index counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupStats {
    /// Number of distinct non-zero digests.
    pub distinct_count: usize,

    /// Number of all-zero blocks observed.
    pub zero_count: u64,

    /// Every observation of a known digest under a non-first owner.
    pub total_cross_owner_matches: u64,

    /// Number of entries that were seen under more than one owner.
    pub distinct_cross_owner_matches: u64,
}

impl fmt::Display for DedupStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "distinct: {}, zero: {}, cross-owner: {} ({} distinct)",
            self.distinct_count,
            self.zero_count,
            self.total_cross_owner_matches,
            self.distinct_cross_owner_matches
        )
    }
}

/// A fixed-capacity table of distinct block digests.
///
/// Entries are kept in first-seen order and looked up through a digest map.
/// Nothing is ever removed. Storage for `capacity` entries is reserved up
/// front; a new digest beyond that fails with
/// [`DedupError::CapacityExhausted`].
///
/// Mutation takes `&mut self`, so one index belongs to one scan at a time.
/// Callers that hash in parallel compute [`Fingerprint`]s first and
/// [`record`](Self::record) them serially.
///
/// # Example
///
/// ```
/// use pagededup::{DedupIndex, OwnerId};
///
/// let mut index = DedupIndex::new(16);
/// let page = [0x5au8; 4096];
///
/// index.observe(&page, OwnerId::new(1))?;
/// index.observe(&page, OwnerId::new(2))?;
/// index.observe(&[0u8; 4096], OwnerId::new(1))?;
///
/// let stats = index.stats();
/// assert_eq!(stats.distinct_count, 1);
/// assert_eq!(stats.zero_count, 1);
/// assert_eq!(stats.distinct_cross_owner_matches, 1);
/// # Ok::<(), pagededup::DedupError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DedupIndex {
    entries: Vec<DedupEntry>,
    positions: HashMap<Digest, usize>,
    capacity: usize,
    zero_count: u64,
    total_cross_owner_matches: u64,
    distinct_cross_owner_matches: u64,
}

impl DedupIndex {
    /// Creates an empty index that can hold `capacity` distinct digests.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            capacity,
            zero_count: 0,
            total_cross_owner_matches: 0,
            distinct_cross_owner_matches: 0,
        }
    }

    /// Classifies `block`, hashes it if it is not all zeros, and records it.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::CapacityExhausted`] when the digest is new and
    /// the index is full. The index is left unchanged in that case.
    pub fn observe(&mut self, block: &[u8], owner: OwnerId) -> Result<Observation, DedupError> {
        self.record(Fingerprint::of(block), owner)
    }

    /// Records a fingerprint that was computed elsewhere.
    ///
    /// Same bookkeeping as [`observe`](Self::observe).
    pub fn record(
        &mut self,
        fingerprint: Fingerprint,
        owner: OwnerId,
    ) -> Result<Observation, DedupError> {
        let digest = match fingerprint {
            Fingerprint::Zero => {
                self.zero_count += 1;
                return Ok(Observation::ZeroBlock);
            }
            Fingerprint::Content(digest) => digest,
        };

        if let Some(&pos) = self.positions.get(&digest) {
            let entry = &mut self.entries[pos];
            entry.bump();

            if entry.first_owner() == owner {
                return Ok(Observation::Duplicate);
            }

            self.total_cross_owner_matches += 1;
            let first_for_entry = entry.flag();
            if first_for_entry {
                self.distinct_cross_owner_matches += 1;
                tracing::debug!(
                    "cross-owner duplicate {}: first {}, now {}",
                    digest,
                    entry.first_owner(),
                    owner
                );
            }
            return Ok(Observation::CrossOwnerMatch { first_for_entry });
        }

        if self.is_full() {
            tracing::warn!(
                "dedup index full ({} entries), cannot add {}",
                self.capacity,
                digest
            );
            return Err(DedupError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        self.positions.insert(digest, self.entries.len());
        self.entries.push(DedupEntry::new(digest, owner));
        Ok(Observation::NewDigest)
    }

    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> DedupStats {
        DedupStats {
            distinct_count: self.entries.len(),
            zero_count: self.zero_count,
            total_cross_owner_matches: self.total_cross_owner_matches,
            distinct_cross_owner_matches: self.distinct_cross_owner_matches,
        }
    }

    /// Returns all entries in first-seen order.
    pub fn entries(&self) -> &[DedupEntry] {
        &self.entries
    }

    /// Looks up the entry for `digest`.
    pub fn get(&self, digest: &Digest) -> Option<&DedupEntry> {
        self.positions.get(digest).map(|&pos| &self.entries[pos])
    }

    /// Iterates over entries that were seen under more than one owner.
    pub fn cross_owner_entries(&self) -> impl Iterator<Item = &DedupEntry> + '_ {
        self.entries.iter().filter(|entry| entry.is_flagged())
    }

    /// Number of distinct digests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no non-zero block was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of distinct digests.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if no new digest can be added.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
