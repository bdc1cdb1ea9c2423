//! Digest type.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

/// A 128-bit content fingerprint.
///
/// This is a thin wrapper around the 16 output bytes of the hash engine,
/// in canonical (little-endian word) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digest([u8; 16]);

impl Digest {
    /// The size of the digest in bytes.
    pub const SIZE: usize = 16;

    /// Computes the digest of `data` in one shot.
    ///
    /// Same as [`digest_of`](crate::digest_of).
    pub fn of(data: &[u8]) -> Self {
        crate::hash::digest_of(data)
    }

    /// Creates a digest from a byte array.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a digest from the four state words, each stored little-endian.
    pub(crate) fn from_words(words: [u32; 4]) -> Self {
        let mut bytes = [0u8; 16];
        for (out, word) in bytes.chunks_exact_mut(4).zip(words) {
            out.copy_from_slice(&word.to_le_bytes());
        }
        Self(bytes)
    }

    /// Creates a digest from a slice.
    ///
    /// Returns `None` if the slice is not exactly 16 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; 16] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Returns the digest as a byte array.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(32);
        for byte in &self.0 {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Parses a digest from a hex string.
    ///
    /// Returns `None` if the string is not valid hex or not exactly 32 characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 32 || !hex_str.is_ascii() {
            return None;
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex_str[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 16]> for Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl StdHash for Digest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
