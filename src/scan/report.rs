//! Summary of a finished scan.

use std::fmt;

use crate::index::DedupStats;

/// Counters of a finished [`ScanSession`](super::ScanSession).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Blocks handed to the session.
    pub blocks_offered: u64,

    /// Blocks skipped because they had no owner.
    pub unowned_skipped: u64,

    /// Blocks skipped because their owner was above the configured limit.
    pub filtered_skipped: u64,

    /// Index counters at the end of the scan.
    pub stats: DedupStats,
}

impl ScanReport {
    /// Blocks that reached the index.
    pub fn blocks_indexed(&self) -> u64 {
        self.blocks_offered - self.unowned_skipped - self.filtered_skipped
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned: {}, indexed: {}, unowned: {}, filtered: {}; {}",
            self.blocks_offered,
            self.blocks_indexed(),
            self.unowned_skipped,
            self.filtered_skipped,
            self.stats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_indexed() {
        let report = ScanReport {
            blocks_offered: 10,
            unowned_skipped: 3,
            filtered_skipped: 2,
            stats: DedupStats::default(),
        };
        assert_eq!(report.blocks_indexed(), 5);
    }

    #[test]
    fn test_display() {
        let report = ScanReport {
            blocks_offered: 4,
            ..Default::default()
        };
        let s = report.to_string();
        assert!(s.starts_with("scanned: 4, indexed: 4"));
        assert!(s.contains("distinct: 0"));
    }
}
