//! djb2 command-name hashing.
//!
//! The same function is evaluated by `engine_macros` when the signature
//! table is generated, so the name-to-hash mapping is stable between build
//! and run.

/// djb2 initial value.
pub const DJB2_SEED: u32 = 5381;

/// Hashes a command name byte-wise, case-sensitively.
///
/// Wrapping 32-bit arithmetic; the empty string hashes to [`DJB2_SEED`].
pub fn command_hash(name: &str) -> u32 {
    let mut hash = DJB2_SEED;
    for &byte in name.as_bytes() {
        // hash * 33 + byte
        hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(byte as u32);
    }
    hash
}
