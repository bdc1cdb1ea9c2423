//! The MD5 compression function.
//!
//! One call consumes a 64-byte block and folds it into the four state words.
//! Words are always read little-endian regardless of the host, which makes
//! the digest host-independent.

use crate::buffer::BLOCK_LEN;

/// Initial state words A, B, C, D.
pub(crate) const INIT_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Per-step additive constants, `floor(2^32 * |sin(i)|)` for i = 1..=64.
const K: [u32; 64] = [
    // Round 1
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    // Round 2
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    // Round 3
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    // Round 4
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, four per round, repeating every four steps.
const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

#[inline(always)]
fn f(b: u32, c: u32, d: u32) -> u32 {
    d ^ (b & (c ^ d))
}

#[inline(always)]
fn g(b: u32, c: u32, d: u32) -> u32 {
    f(d, b, c)
}

#[inline(always)]
fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Loads one little-endian word.
///
/// Goes through the native load and a conditional swap, the same shape as
/// a C `SWAP` macro, so the big-endian branch stays testable on any host.
#[inline(always)]
pub(crate) fn load_word(bytes: [u8; 4]) -> u32 {
    u32::from_le(u32::from_ne_bytes(bytes))
}

/// Splits a block into its sixteen message words.
fn message_words(block: &[u8]) -> [u32; 16] {
    let mut x = [0u32; 16];
    for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4)) {
        *word = load_word([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    x
}

/// Runs the 64-step transform over one block and chains it into `state`.
///
/// `block` must be exactly [`BLOCK_LEN`] bytes.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let x = message_words(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let round = step / 16;
        let (mix, word) = match round {
            0 => (f(b, c, d), step),
            1 => (g(b, c, d), (5 * step + 1) % 16),
            2 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(x[word])
            .wrapping_add(K[step])
            .rotate_left(SHIFTS[round][step % 4]);

        // Accumulators rotate roles: (a, b, c, d) <- (d, b + rot, b, c)
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_sine_table() {
        for (n, &k) in K.iter().enumerate() {
            let expected = (((n + 1) as f64).sin().abs() * 4294967296.0).floor() as u32;
            assert_eq!(k, expected, "constant {} differs", n);
        }
    }

    #[test]
    fn test_round_functions() {
        // F selects c where b is set, d elsewhere
        assert_eq!(f(0xffff0000, 0x12345678, 0x9abcdef0), 0x1234def0);
        // G selects b where d is set, c elsewhere
        assert_eq!(g(0x12345678, 0x9abcdef0, 0xffff0000), 0x1234def0);
        assert_eq!(h(0xf0f0f0f0, 0x0ff00ff0, 0x00000000), 0xff00ff00);
        assert_eq!(i(0, 0, 0xffffffff), 0);
    }

    #[test]
    fn test_load_word_both_byte_orders() {
        let bytes = [0x01, 0x23, 0x45, 0x67];

        // Little-endian host path: no swap
        let little = u32::from_le_bytes(bytes);
        // Big-endian host path: native read sees the bytes reversed, swap fixes it
        let big = u32::from_be_bytes(bytes).swap_bytes();

        assert_eq!(load_word(bytes), 0x67452301);
        assert_eq!(little, 0x67452301);
        assert_eq!(big, 0x67452301);
    }

    #[test]
    fn test_message_words_order() {
        let mut block = [0u8; BLOCK_LEN];
        block[0] = 0x80;
        block[60..].copy_from_slice(&[0x01, 0x00, 0x00, 0x00]);

        let x = message_words(&block);
        assert_eq!(x[0], 0x00000080);
        assert_eq!(x[15], 0x00000001);
        assert!(x[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_compress_changes_state() {
        let mut state = INIT_STATE;
        compress(&mut state, &[0u8; BLOCK_LEN]);
        assert_ne!(state, INIT_STATE);

        // Deterministic
        let mut again = INIT_STATE;
        compress(&mut again, &[0u8; BLOCK_LEN]);
        assert_eq!(state, again);
    }
}
