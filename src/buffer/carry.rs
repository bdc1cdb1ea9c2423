//! Carry buffer for partial compression blocks.

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Holds up to one compression block of not-yet-processed input.
///
/// The buffer owns a fixed 64-byte array and tracks how many leading bytes
/// are valid. Bytes are only ever added at the end and the buffer is drained
/// as a whole, so no overlapping copies are needed.
#[derive(Debug, Clone)]
pub struct CarryBuffer {
    bytes: [u8; BLOCK_LEN],
    len: usize,
}

impl CarryBuffer {
    /// Creates an empty carry buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BLOCK_LEN],
            len: 0,
        }
    }

    /// Copies as much of `input` as fits and returns the number of bytes taken.
    pub fn fill(&mut self, input: &[u8]) -> usize {
        let take = input.len().min(BLOCK_LEN - self.len);
        self.bytes[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        take
    }

    /// Returns the valid bytes.
    pub fn filled(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Returns the whole block. Only meaningful when [`is_full`](Self::is_full).
    pub fn block(&self) -> &[u8; BLOCK_LEN] {
        &self.bytes
    }

    /// Number of valid bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bytes are carried.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when a whole block is buffered.
    pub fn is_full(&self) -> bool {
        self.len == BLOCK_LEN
    }

    /// Marks the buffer empty without touching the storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for CarryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_partial() {
        let mut buf = CarryBuffer::new();
        assert_eq!(buf.fill(b"hello"), 5);
        assert_eq!(buf.filled(), b"hello");
        assert_eq!(buf.len(), 5);
        assert!(!buf.is_full());
    }

    #[test]
    fn test_fill_stops_at_block_len() {
        let mut buf = CarryBuffer::new();
        buf.fill(&[1u8; 60]);

        let taken = buf.fill(&[2u8; 10]);
        assert_eq!(taken, 4);
        assert!(buf.is_full());
        assert_eq!(&buf.block()[56..], &[1, 1, 1, 1, 2, 2, 2, 2]);

        // Nothing more fits
        assert_eq!(buf.fill(&[3u8; 8]), 0);
    }

    #[test]
    fn test_clear() {
        let mut buf = CarryBuffer::new();
        buf.fill(&[7u8; 64]);
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.filled().is_empty());

        // Refilling after clear starts from the front
        buf.fill(b"ab");
        assert_eq!(buf.filled(), b"ab");
    }

    #[test]
    fn test_fill_empty_input() {
        let mut buf = CarryBuffer::new();
        assert_eq!(buf.fill(&[]), 0);
        assert!(buf.is_empty());
    }
}
