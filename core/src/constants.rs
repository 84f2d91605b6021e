//! constants.rs
//! Stable codec ids, chain bounds and fixed cipher parameters.

/// Stable codec IDs (u16) for the registry and chain keys.
///
/// Ids 0..=4 are the historical key space and must never be renumbered;
/// anything a user ever copied as a chain key depends on them.
pub mod codec_ids {
    pub const BASE64: u16       = 0x0000;
    pub const HEX: u16          = 0x0001;
    pub const URL: u16          = 0x0002;
    pub const BASE32: u16       = 0x0003;
    pub const ROT13: u16        = 0x0004;
    pub const CAESAR: u16       = 0x0005;
    pub const ATBASH: u16       = 0x0006;
    pub const SUBSTITUTION: u16 = 0x0007;
    pub const ASCII85: u16      = 0x0008;
    pub const SEEDED_XOR: u16   = 0x0009;
}

/// Repeat count bounds for a single chain step (inclusive).
pub const MIN_REPEAT: u8 = 1;
pub const MAX_REPEAT: u8 = 10;

/// Serialized form of a chain with no steps.
pub const EMPTY_CHAIN_KEY: &str = "empty";

/// Default Caesar shift when no config overrides it.
pub const DEFAULT_CAESAR_SHIFT: u8 = 3;

/// Block size of the ECB cipher (bytes).
pub const BLOCK_LEN: usize = 16;

/// Block cipher key length (bytes) and its hex rendering length.
pub const BLOCK_KEY_LEN: usize = 16;
pub const BLOCK_KEY_HEX_LEN: usize = BLOCK_KEY_LEN * 2;

/// Fixed seed for the position-based XOR cipher.
pub const XOR_SEED: [u8; 8] = [0x13, 0x37, 0x42, 0x5a, 0x0f, 0x66, 0x21, 0x7e];

/// Substitution cipher permutation of `a..=z` (keyboard order).
pub const SUBSTITUTION_KEY: &[u8; 26] = b"qwertyuiopasdfghjklzxcvbnm";
