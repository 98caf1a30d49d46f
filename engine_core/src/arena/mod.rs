//! Scratch arena backing decoded binary arguments.
//!
//! A bump allocator over a caller-owned byte buffer that lives on the
//! dispatch call's stack. Chunks are handed out as disjoint slices with the
//! buffer's lifetime, so a decoded argument stays valid while later
//! arguments keep appending; nothing is ever reused within a call and the
//! whole buffer is discarded when the call returns.

/// Why a hex token could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Empty token.
    Empty,
    /// Hex strings carry two digits per byte.
    OddLength,
    /// A byte outside `0-9`, `a-f`, `A-F`.
    InvalidDigit,
    /// The decoded bytes would not fit the remaining arena capacity.
    Exhausted,
}

/// Append-only view over the caller's scratch storage.
pub struct ScratchArena<'buf> {
    free: &'buf mut [u8],
}

impl<'buf> ScratchArena<'buf> {
    /// Wraps `storage`; the arena is "reset" simply by building a fresh one
    /// over the buffer at the start of each dispatch call.
    pub fn new(storage: &'buf mut [u8]) -> Self {
        Self { free: storage }
    }

    /// Bytes still available for decoding.
    pub fn remaining(&self) -> usize {
        self.free.len()
    }

    /// Decodes a hex token into the arena and returns the decoded chunk.
    ///
    /// The token must be a non-empty, even-length run of hex digits
    /// (case-insensitive); the first digit of each pair is the high nibble.
    /// The offset advances by the decoded length.
    pub fn decode_hex(&mut self, token: &str) -> Result<&'buf [u8], HexError> {
        let digits = token.as_bytes();
        if digits.is_empty() {
            return Err(HexError::Empty);
        }
        if digits.len() % 2 != 0 {
            return Err(HexError::OddLength);
        }
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(HexError::InvalidDigit);
        }
        let decoded_len = digits.len() / 2;
        if decoded_len > self.free.len() {
            return Err(HexError::Exhausted);
        }

        // Detach the free region so the returned chunk borrows the backing
        // buffer rather than the arena itself.
        let free = core::mem::take(&mut self.free);
        let (chunk, rest) = free.split_at_mut(decoded_len);
        for (out, pair) in chunk.iter_mut().zip(digits.chunks_exact(2)) {
            *out = (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]);
        }
        self.free = rest;
        Ok(chunk)
    }
}

/// Nibble value of an already validated ASCII hex digit.
#[inline(always)]
const fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod arena_tests {
    use super::*;

    #[test]
    fn decodes_hex_pairs_high_nibble_first() {
        let mut storage = [0u8; 16];
        let mut arena = ScratchArena::new(&mut storage);
        assert_eq!(arena.decode_hex("01FF"), Ok(&[0x01, 0xFF][..]));
    }

    #[test]
    fn case_insensitive_digits() {
        let mut storage = [0u8; 16];
        let mut arena = ScratchArena::new(&mut storage);
        assert_eq!(arena.decode_hex("aAbBcC"), Ok(&[0xAA, 0xBB, 0xCC][..]));
    }

    #[test]
    fn rejects_empty_odd_and_invalid() {
        let mut storage = [0u8; 16];
        let mut arena = ScratchArena::new(&mut storage);
        assert_eq!(arena.decode_hex(""), Err(HexError::Empty));
        assert_eq!(arena.decode_hex("012"), Err(HexError::OddLength));
        assert_eq!(arena.decode_hex("0G"), Err(HexError::InvalidDigit));
        // Nothing was consumed by the rejections.
        assert_eq!(arena.remaining(), 16);
    }

    #[test]
    fn rejects_when_capacity_exhausted() {
        let mut storage = [0u8; 4];
        let mut arena = ScratchArena::new(&mut storage);
        assert_eq!(arena.decode_hex("0102030405"), Err(HexError::Exhausted));
        assert_eq!(arena.decode_hex("010203"), Ok(&[1, 2, 3][..]));
        assert_eq!(arena.decode_hex("0405"), Err(HexError::Exhausted));
        assert_eq!(arena.decode_hex("04"), Ok(&[4][..]));
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn chunks_stay_valid_across_later_decodes() {
        let mut storage = [0u8; 8];
        let mut arena = ScratchArena::new(&mut storage);
        let first = arena.decode_hex("DEAD").unwrap();
        let second = arena.decode_hex("BEEF").unwrap();
        assert_eq!(first, &[0xDE, 0xAD]);
        assert_eq!(second, &[0xBE, 0xEF]);
        assert_eq!(arena.remaining(), 4);
    }
}
