//! Streaming MD5 engine for block fingerprints.
//!
//! This module implements RFC 1321 MD5 from scratch so the byte-level
//! behavior (padding, length encoding, word order) is fully under our
//! control and identical on every host.
//!
//! - [`HashState`] - Incremental `new()`/`append()`/`finish()` engine
//! - [`digest_of`] - One-shot convenience over a single buffer

mod state;
mod transform;

pub use state::{HashState, digest_of};
