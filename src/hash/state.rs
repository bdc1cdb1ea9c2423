//! Incremental hashing state - `new()`/`append()`/`finish()`.
//!
//! # Example
//!
//! ```
//! use pagededup::{HashState, digest_of};
//!
//! let mut state = HashState::new();
//!
//! // Feed data in any size
//! state.append(b"ab");
//! state.append(b"c");
//!
//! // Chunking never changes the result
//! assert_eq!(state.finish(), digest_of(b"abc"));
//! ```

use crate::block::Digest;
use crate::buffer::{BLOCK_LEN, CarryBuffer};

use super::transform::{INIT_STATE, compress};

/// Offset inside the final block where the bit length starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// An in-progress digest computation.
///
/// `HashState` accepts bytes through `append()` in chunks of any size and
/// carries fewer than 64 leftover bytes between calls. `finish()` consumes
/// the state, so a finalized computation cannot be fed again.
///
/// # Determinism
///
/// The digest depends only on the concatenation of all appended bytes, not
/// on how they were split across calls, and not on host byte order.
#[derive(Debug, Clone)]
pub struct HashState {
    words: [u32; 4],
    total: u64,
    carry: CarryBuffer,
}

impl HashState {
    /// Creates a fresh state.
    pub fn new() -> Self {
        Self {
            words: INIT_STATE,
            total: 0,
            carry: CarryBuffer::new(),
        }
    }

    /// Feeds `data` into the computation.
    ///
    /// Whole 64-byte blocks are compressed right away; any remainder is
    /// kept for the next call. Empty input is a no-op.
    pub fn append(&mut self, data: &[u8]) {
        self.total = self.total.wrapping_add(data.len() as u64);

        let mut input = data;
        if !self.carry.is_empty() {
            let taken = self.carry.fill(input);
            input = &input[taken..];
            if !self.carry.is_full() {
                return;
            }
            compress(&mut self.words, self.carry.block());
            self.carry.clear();
        }

        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.words, block);
        }
        self.carry.fill(blocks.remainder());
    }

    /// Pads the message, processes the last block(s) and returns the digest.
    ///
    /// Padding is a single `0x80`, zeros up to byte 56 of the final block,
    /// then the message length in bits as two little-endian words, low word
    /// first. A carry of 56 bytes or more spills the length into an extra
    /// block.
    pub fn finish(mut self) -> Digest {
        let carried = self.carry.len();
        let bits = self.total.wrapping_mul(8);

        let mut tail = [0u8; 2 * BLOCK_LEN];
        tail[..carried].copy_from_slice(self.carry.filled());
        tail[carried] = 0x80;

        let end = if carried >= LENGTH_OFFSET {
            2 * BLOCK_LEN
        } else {
            BLOCK_LEN
        };
        tail[end - 8..end - 4].copy_from_slice(&(bits as u32).to_le_bytes());
        tail[end - 4..end].copy_from_slice(&((bits >> 32) as u32).to_le_bytes());

        for block in tail[..end].chunks_exact(BLOCK_LEN) {
            compress(&mut self.words, block);
        }

        Digest::from_words(self.words)
    }

    /// Returns the number of bytes appended so far (modulo 2^64).
    pub fn len(&self) -> u64 {
        self.total
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of bytes waiting in the carry buffer.
    pub fn pending_len(&self) -> usize {
        self.carry.len()
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the digest of a single in-memory buffer.
///
/// Equivalent to `HashState::new()`, one `append(data)`, then `finish()`.
pub fn digest_of(data: &[u8]) -> Digest {
    let mut state = HashState::new();
    state.append(data);
    state.finish()
}
