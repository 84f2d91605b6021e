//! codecs/xor.rs
//! Position-based XOR cipher with a fixed 8-byte seed.
//!
//! Range policy:
//! - Positions count UTF-16 code units, and each unit is XORed with
//!   `XOR_SEED[i % 8]`.
//! - A seed byte only touches the low 8 bits, so a unit stays inside its
//!   256-aligned block. Surrogate halves therefore remain surrogate halves of
//!   the same kind and the output is always well-formed UTF-16.
//! - Every resulting scalar value is accepted, control characters included.
//!
//! `apply` is its own inverse.

use crate::codecs::types::CodecError;
use crate::constants::XOR_SEED;

pub fn apply(text: &str) -> Result<String, CodecError> {
    let units: Vec<u16> = text
        .encode_utf16()
        .enumerate()
        .map(|(i, unit)| unit ^ XOR_SEED[i % XOR_SEED.len()] as u16)
        .collect();

    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf8 { valid_up_to: 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_unit_uses_first_seed_byte() {
        let out = apply("\u{0}").unwrap();
        assert_eq!(out, "\u{13}");
    }

    #[test]
    fn astral_characters_survive() {
        let text = "a🦀b𝄞c";
        let once = apply(text).unwrap();
        assert_ne!(once, text);
        assert_eq!(apply(&once).unwrap(), text);
    }
}
