//! codecs/hex.rs
//! Hex (base16) with configurable byte delimiters.
//!
//! Decoding consumes every fragment two characters at a time. An odd
//! trailing character in a fragment is dropped rather than rejected, which
//! keeps pasted dumps with a stray nibble decodable.

use crate::codecs::types::{CodecError, DelimiterStyle};
use crate::utils::{from_bytes, to_bytes};

const CODEC: &str = "hex";

/// Render bytes as lowercase hex using `style`.
pub fn encode_bytes(bytes: &[u8], style: DelimiterStyle) -> Result<String, CodecError> {
    if !style.can_encode() {
        return Err(CodecError::Configuration(
            "hex delimiter Auto is decode-only".into(),
        ));
    }

    let token = style.token();
    let mut out = String::with_capacity(bytes.len() * (2 + token.len()));
    for (i, byte) in bytes.iter().enumerate() {
        if style.is_prefix() {
            out.push_str(token);
        } else if i > 0 {
            out.push_str(token);
        }
        out.push_str(&::hex::encode([*byte]));
    }
    Ok(out)
}

/// Parse hex delimited by `style` back into bytes.
pub fn decode_bytes(input: &str, style: DelimiterStyle) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(input.len() / 2);

    match style {
        DelimiterStyle::Auto => {
            let stripped = strip_prefix_tokens(input);
            for fragment in stripped
                .split(|c: char| !c.is_ascii_hexdigit())
                .filter(|f| !f.is_empty())
            {
                decode_fragment(fragment, &mut out)?;
            }
        }
        s if s.is_prefix() => {
            for fragment in input.split(s.token()).filter(|f| !f.is_empty()) {
                decode_fragment(fragment, &mut out)?;
            }
        }
        DelimiterStyle::None => decode_fragment(input, &mut out)?,
        s => {
            for fragment in input.split(s.token()) {
                decode_fragment(fragment, &mut out)?;
            }
        }
    }

    Ok(out)
}

pub fn encode(text: &str, style: DelimiterStyle) -> Result<String, CodecError> {
    encode_bytes(&to_bytes(text), style)
}

pub fn decode(text: &str, style: DelimiterStyle) -> Result<String, CodecError> {
    from_bytes(decode_bytes(text, style)?)
}

fn strip_prefix_tokens(input: &str) -> String {
    input.replace("0x", " ").replace("0X", " ").replace("\\x", " ")
}

fn decode_fragment(fragment: &str, out: &mut Vec<u8>) -> Result<(), CodecError> {
    let chars: Vec<char> = fragment.chars().collect();
    // chunks_exact leaves the odd trailing character in the remainder, which is ignored.
    for pair in chars.chunks_exact(2) {
        let hi = pair[0].to_digit(16);
        let lo = pair[1].to_digit(16);
        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push((hi * 16 + lo) as u8),
            _ => {
                let bad: String = pair.iter().collect();
                return Err(CodecError::decode(
                    CODEC,
                    format!("invalid hex digits {bad:?} in fragment {fragment:?}"),
                ));
            }
        }
    }
    Ok(())
}
