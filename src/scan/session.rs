//! Scan session - the caller side of the index.
//!
//! A session owns one [`DedupIndex`] for the duration of a scan. The block
//! source (whatever enumerates pages and maps them) hands each block to
//! `offer()` together with its owner; the session drops blocks the index
//! must never see and forwards the rest.
//!
//! # Example
//!
//! ```
//! use pagededup::{OwnerId, ScanConfig, ScanSession};
//!
//! let mut session = ScanSession::new(ScanConfig::new(1024)?)?;
//!
//! let page = [0x11u8; 4096];
//! session.offer(Some(OwnerId::new(1)), &page)?;
//! session.offer(Some(OwnerId::new(2)), &page)?;
//! session.offer(None, &page)?; // free page, skipped
//!
//! let report = session.finish();
//! assert_eq!(report.blocks_offered, 3);
//! assert_eq!(report.unowned_skipped, 1);
//! assert_eq!(report.stats.total_cross_owner_matches, 1);
//! # Ok::<(), pagededup::DedupError>(())
//! ```

use crate::block::{Block, OwnerId};
use crate::config::ScanConfig;
use crate::error::DedupError;
use crate::index::{DedupIndex, Observation};

use super::ScanReport;

/// One scan over a set of blocks.
///
/// # Filters
///
/// - Blocks without an owner are counted and skipped.
/// - Blocks whose owner is above [`ScanConfig::max_owner`] are counted and
///   skipped.
///
/// # Errors
///
/// A full index is fatal: the error is returned as-is and the caller is
/// expected to abandon the scan.
#[derive(Debug)]
pub struct ScanSession {
    index: DedupIndex,
    config: ScanConfig,
    blocks_offered: u64,
    unowned_skipped: u64,
    filtered_skipped: u64,
}

impl ScanSession {
    /// Creates a session with an empty index sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DedupError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: ScanConfig) -> Result<Self, DedupError> {
        config.validate()?;
        Ok(Self {
            index: DedupIndex::new(config.capacity()),
            config,
            blocks_offered: 0,
            unowned_skipped: 0,
            filtered_skipped: 0,
        })
    }

    /// Counts a block and returns its owner if the block should be indexed.
    fn admit(&mut self, owner: Option<OwnerId>) -> Option<OwnerId> {
        self.blocks_offered += 1;

        let Some(owner) = owner else {
            self.unowned_skipped += 1;
            tracing::trace!("skipping unowned block");
            return None;
        };

        if !self.config.tracks(owner) {
            self.filtered_skipped += 1;
            tracing::trace!("skipping block of {} above owner limit", owner);
            return None;
        }

        Some(owner)
    }

    /// Offers one block to the scan.
    ///
    /// Returns `Ok(None)` if the block was filtered out, otherwise what the
    /// index did with it.
    pub fn offer(
        &mut self,
        owner: Option<OwnerId>,
        block: &[u8],
    ) -> Result<Option<Observation>, DedupError> {
        match self.admit(owner) {
            Some(owner) => self.index.observe(block, owner).map(Some),
            None => Ok(None),
        }
    }

    /// Offers a [`Block`].
    pub fn offer_block(&mut self, block: &Block) -> Result<Option<Observation>, DedupError> {
        self.offer(block.owner(), block.data())
    }

    /// Offers every block from `blocks`, stopping at the first error.
    pub fn offer_all<'a, I>(&mut self, blocks: I) -> Result<(), DedupError>
    where
        I: IntoIterator<Item = (Option<OwnerId>, &'a [u8])>,
    {
        for (owner, block) in blocks {
            self.offer(owner, block)?;
        }
        Ok(())
    }

    /// Offers a batch of blocks, hashing them on the rayon pool.
    ///
    /// Fingerprints are computed in parallel; recording into the index
    /// happens afterwards on this thread, in input order, so the result is
    /// identical to calling [`offer_block`](Self::offer_block) for each.
    #[cfg(feature = "parallel")]
    pub fn offer_batch(&mut self, blocks: &[Block]) -> Result<(), DedupError> {
        use rayon::prelude::*;

        use crate::index::Fingerprint;

        let config = self.config;
        let fingerprints: Vec<Option<Fingerprint>> = blocks
            .par_iter()
            .map(|block| {
                block
                    .owner()
                    .filter(|&owner| config.tracks(owner))
                    .map(|_| Fingerprint::of(block.data()))
            })
            .collect();

        for (block, fingerprint) in blocks.iter().zip(fingerprints) {
            if let (Some(owner), Some(fingerprint)) = (self.admit(block.owner()), fingerprint) {
                self.index.record(fingerprint, owner)?;
            }
        }
        Ok(())
    }

    /// Returns the index built so far.
    pub fn index(&self) -> &DedupIndex {
        &self.index
    }

    /// Returns the configuration of this session.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the counters collected so far.
    pub fn report(&self) -> ScanReport {
        ScanReport {
            blocks_offered: self.blocks_offered,
            unowned_skipped: self.unowned_skipped,
            filtered_skipped: self.filtered_skipped,
            stats: self.index.stats(),
        }
    }

    /// Ends the scan and returns its counters.
    pub fn finish(self) -> ScanReport {
        let report = self.report();
        tracing::debug!("scan finished: {}", report);
        report
    }

    /// Ends the scan and hands over the index, e.g. to dump its entries.
    pub fn into_index(self) -> DedupIndex {
        self.index
    }
}
