//! codecs/ascii85.rs
//! Ascii85 (btoa flavour): digits are `value + 33`, `z` abbreviates a full
//! all-zero group, no `<~ ~>` delimiters.
//!
//! Wire rules:
//! - 4 input bytes -> 5 digits, most significant first (big-endian u32).
//! - A final group of n bytes (1..=3) is zero-padded for the arithmetic and
//!   emits only n+1 digits.
//! - Decoding pads a short final run with the maximal digit (84, `u`) and
//!   keeps run_len-1 bytes, so a lone trailing digit decodes to nothing.

use crate::codecs::types::CodecError;
use crate::utils::{from_bytes, to_bytes};

const CODEC: &str = "ascii85";

const DIGIT_BASE: u8 = 33;
const DIGIT_MAX: u8 = 117;
const PAD_DIGIT: u64 = 84;
const ZERO_GROUP: char = 'z';

pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() / 4 * 5 + 5);

    for group in bytes.chunks(4) {
        let mut word = [0u8; 4];
        word[..group.len()].copy_from_slice(group);
        let mut value = u32::from_be_bytes(word);

        if group.len() == 4 && value == 0 {
            out.push(ZERO_GROUP);
            continue;
        }

        let mut digits = [0u8; 5];
        for slot in digits.iter_mut().rev() {
            *slot = (value % 85) as u8 + DIGIT_BASE;
            value /= 85;
        }
        for &d in &digits[..group.len() + 1] {
            out.push(d as char);
        }
    }
    out
}

pub fn decode_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    let mut acc: u64 = 0;
    let mut run: usize = 0;

    for (pos, c) in input.chars().enumerate() {
        if c.is_ascii_whitespace() {
            continue;
        }

        if c == ZERO_GROUP {
            if run != 0 {
                return Err(CodecError::decode(
                    CODEC,
                    format!("'z' inside a group at position {pos}"),
                ));
            }
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        let code = c as u32;
        if code < DIGIT_BASE as u32 || code > DIGIT_MAX as u32 {
            return Err(CodecError::decode(
                CODEC,
                format!("character {c:?} at position {pos} is outside '!'..='u'"),
            ));
        }

        acc = acc * 85 + (code - DIGIT_BASE as u32) as u64;
        run += 1;
        if run == 5 {
            let word = group_value(acc, pos)?;
            out.extend_from_slice(&word.to_be_bytes());
            acc = 0;
            run = 0;
        }
    }

    if run > 0 {
        for _ in run..5 {
            acc = acc * 85 + PAD_DIGIT;
        }
        // A lone trailing digit keeps zero bytes, so its padded value is never read.
        let kept = run - 1;
        if kept > 0 {
            let word = group_value(acc, input.len())?;
            out.extend_from_slice(&word.to_be_bytes()[..kept]);
        }
    }

    Ok(out)
}

pub fn encode(text: &str) -> String {
    encode_bytes(&to_bytes(text))
}

pub fn decode(text: &str) -> Result<String, CodecError> {
    from_bytes(decode_bytes(text)?)
}

fn group_value(acc: u64, pos: usize) -> Result<u32, CodecError> {
    u32::try_from(acc).map_err(|_| {
        CodecError::decode(CODEC, format!("group ending near position {pos} overflows 32 bits"))
    })
}
