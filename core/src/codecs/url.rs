//! codecs/url.rs
//! Percent-encoding over the RFC 3986 unreserved set.

use crate::codecs::types::CodecError;
use crate::utils::from_bytes;

const CODEC: &str = "url";

#[inline]
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

pub fn encode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for byte in text.bytes() {
        if is_unreserved(byte) {
            result.push(byte as char);
        } else {
            result.push_str(&format!("%{byte:02X}"));
        }
    }
    result
}

/// Decode `%XX` escapes. `+` is left alone; this is not form encoding.
pub fn decode(text: &str) -> Result<String, CodecError> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
        let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
        match (hi, lo) {
            (Some(hi), Some(lo)) => {
                out.push((hi * 16 + lo) as u8);
                i += 3;
            }
            _ => {
                let end = (i + 3).min(bytes.len());
                return Err(CodecError::decode(
                    CODEC,
                    format!(
                        "malformed escape {:?} at byte {}",
                        String::from_utf8_lossy(&bytes[i..end]),
                        i
                    ),
                ));
            }
        }
    }

    from_bytes(out)
}
