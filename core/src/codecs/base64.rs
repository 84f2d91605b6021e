//! Standard RFC 4648 Base64 (padded, no line wrapping) via the `base64` crate.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;

use crate::codecs::types::CodecError;
use crate::utils::from_bytes;

const CODEC: &str = "base64";

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode(text: &str) -> Result<String, CodecError> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| CodecError::decode(CODEC, e.to_string()))?;
    from_bytes(bytes)
}
