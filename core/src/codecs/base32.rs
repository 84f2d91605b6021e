//! codecs/base32.rs
//! RFC 4648 Base32 (`A-Z2-7`, `=` padded to a multiple of 8).
//!
//! Both directions run a small bit accumulator: encode drains 5 bits per
//! symbol, decode drains 8 bits per byte.

use crate::codecs::types::CodecError;
use crate::utils::{from_bytes, to_bytes};

const CODEC: &str = "base32";

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() + 4) / 5 * 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            let index = (buffer >> (bits - 5)) & 0x1f;
            out.push(ALPHABET[index as usize] as char);
            bits -= 5;
        }
        // Only the low `bits` bits are still meaningful.
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        let index = (buffer << (5 - bits)) & 0x1f;
        out.push(ALPHABET[index as usize] as char);
    }

    while out.len() % 8 != 0 {
        out.push('=');
    }
    out
}

pub fn decode_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (pos, c) in input.chars().enumerate() {
        if c == '=' {
            continue;
        }
        let value = symbol_value(c).ok_or_else(|| {
            CodecError::decode(CODEC, format!("invalid symbol {c:?} at position {pos}"))
        })?;

        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            out.push((buffer >> (bits - 8)) as u8);
            bits -= 8;
            buffer &= (1 << bits) - 1;
        }
    }

    // Leftover bits (< 8) are the zero fill added by the encoder.
    Ok(out)
}

pub fn encode(text: &str) -> String {
    encode_bytes(&to_bytes(text))
}

pub fn decode(text: &str) -> Result<String, CodecError> {
    from_bytes(decode_bytes(text)?)
}

#[inline]
fn symbol_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        u @ 'A'..='Z' => Some(u as u32 - 'A' as u32),
        d @ '2'..='7' => Some(d as u32 - '2' as u32 + 26),
        _ => None,
    }
}
