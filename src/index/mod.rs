//! Content-addressed dedup index.
//!
//! The index keeps one [`DedupEntry`] per distinct non-zero block digest and
//! counts how often each was seen and whether it was seen under more than
//! one owner. All-zero blocks are only counted.
//!
//! - [`DedupIndex`] - Fixed-capacity table with `observe()`/`stats()`
//! - [`Fingerprint`] - Zero-or-digest classification of one block
//! - [`Observation`] - What a single `observe()` call did

mod entry;
mod fingerprint;
mod table;

pub use entry::DedupEntry;
pub use fingerprint::Fingerprint;
pub use table::{DedupIndex, DedupStats, Observation};
