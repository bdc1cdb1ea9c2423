//! Scan driver for feeding blocks into an index.
//!
//! - [`ScanSession`] - Owns a [`DedupIndex`](crate::DedupIndex) for one scan, applies owner filters
//! - [`ScanReport`] - Final counters of a finished scan

mod report;
mod session;

pub use report::ScanReport;
pub use session::ScanSession;
