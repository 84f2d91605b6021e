//! utils.rs
//! Byte/Text bridge and small formatting helpers shared by every layer.

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::codecs::types::CodecError;

/// Encode text as its UTF-8 byte sequence.
#[inline]
pub fn to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode a UTF-8 byte sequence back into text.
///
/// Fails with `CodecError::InvalidUtf8` instead of substituting U+FFFD, so a
/// corrupted decode never reaches the caller as plausible-looking text.
pub fn from_bytes(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}
