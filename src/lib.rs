//! pagededup
//!
//! Content fingerprinting and duplicate attribution for fixed-size memory
//! blocks.
//!
//! `pagededup` hashes blocks (typically 4 KiB pages) with a streaming MD5
//! engine and records the digests in a fixed-capacity index that tracks:
//!
//! - how many distinct non-zero blocks exist
//! - how many blocks are entirely zero
//! - which digests show up under more than one owner
//!
//! The crate intentionally:
//! - does NOT enumerate or map memory
//! - does NOT decide which blocks are valid or who owns them
//! - does NOT print or persist anything
//! - does NOT aim for adversarial collision resistance
//!
//! It only does one thing: **Blocks in → digests & duplicate counts out**
//!
//! # Hashing
//!
//! ```
//! use pagededup::{HashState, digest_of};
//!
//! let mut state = HashState::new();
//! state.append(b"a");
//! state.append(b"bc");
//!
//! let digest = state.finish();
//! assert_eq!(digest, digest_of(b"abc"));
//! assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! # Scanning
//!
//! ```
//! use pagededup::{OwnerId, ScanConfig, ScanSession};
//!
//! fn scan(pages: &[(Option<u32>, [u8; 4096])]) -> Result<(), pagededup::DedupError> {
//!     let mut session = ScanSession::new(ScanConfig::new(1 << 16)?)?;
//!
//!     for (owner, page) in pages {
//!         session.offer(owner.map(OwnerId::new), page)?;
//!     }
//!
//!     println!("{}", session.finish());
//!     Ok(())
//! }
//! ```
//!
//! # Parallel hashing (feature = "parallel")
//!
//! `ScanSession::offer_batch` fingerprints a batch of [`Block`]s on the rayon
//! pool and merges the results into the index on the calling thread.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod config;
mod error;
mod hash;
mod index;
mod scan;

mod buffer; // internal carry buffer
mod util;

//
// Public surface
//

pub use block::{Block, Digest, OwnerId};
pub use config::{DEFAULT_BLOCK_SIZE, DEFAULT_CAPACITY, ScanConfig};
pub use error::DedupError;
pub use hash::{HashState, digest_of};
pub use index::{DedupEntry, DedupIndex, DedupStats, Fingerprint, Observation};
pub use scan::{ScanReport, ScanSession};
