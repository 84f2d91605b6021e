//! codecs/types.rs
//! Codec identities, the closed `Codec` dispatch enum, hex delimiter styles
//! and the codec-level error type.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codecs::{ascii85, base32, base64, classical, hex, url, xor};
use crate::constants::codec_ids;

/// Errors raised by a single codec at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Malformed or out-of-alphabet input.
    #[error("{codec} decode failed: {detail}")]
    Decode { codec: &'static str, detail: String },

    /// Decoded bytes cannot be rendered losslessly as text.
    #[error("decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    /// Bad parameters, e.g. a block key that is not exactly 16 bytes.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CodecError {
    pub(crate) fn decode(codec: &'static str, detail: impl Into<String>) -> Self {
        CodecError::Decode { codec, detail: detail.into() }
    }
}

/// Registry-visible codec kinds; discriminants are the stable chain-key ids.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CodecKind {
    Base64       = codec_ids::BASE64,
    Hex          = codec_ids::HEX,
    Url          = codec_ids::URL,
    Base32       = codec_ids::BASE32,
    Rot13        = codec_ids::ROT13,
    Caesar       = codec_ids::CAESAR,
    Atbash       = codec_ids::ATBASH,
    Substitution = codec_ids::SUBSTITUTION,
    Ascii85      = codec_ids::ASCII85,
    SeededXor    = codec_ids::SEEDED_XOR,
}

impl CodecKind {
    pub const ALL: [CodecKind; 10] = [
        CodecKind::Base64,
        CodecKind::Hex,
        CodecKind::Url,
        CodecKind::Base32,
        CodecKind::Rot13,
        CodecKind::Caesar,
        CodecKind::Atbash,
        CodecKind::Substitution,
        CodecKind::Ascii85,
        CodecKind::SeededXor,
    ];

    #[inline]
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            CodecKind::Base64 => "Base64",
            CodecKind::Hex => "Hex",
            CodecKind::Url => "URL",
            CodecKind::Base32 => "Base32",
            CodecKind::Rot13 => "ROT13",
            CodecKind::Caesar => "Caesar",
            CodecKind::Atbash => "Atbash",
            CodecKind::Substitution => "Substitution",
            CodecKind::Ascii85 => "Ascii85",
            CodecKind::SeededXor => "Seeded XOR",
        }
    }
}

/// How hex digits for consecutive bytes are delimited.
///
/// Separator styles place the token strictly between bytes; prefix styles put
/// it in front of every byte. `Auto` only makes sense when decoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterStyle {
    #[default]
    Space,
    Colon,
    Comma,
    Semicolon,
    LineFeed,
    Crlf,
    /// `0x` in front of every byte.
    ZeroX,
    /// `\x` in front of every byte.
    BackslashX,
    None,
    Auto,
}

impl DelimiterStyle {
    pub fn token(self) -> &'static str {
        match self {
            DelimiterStyle::Space => " ",
            DelimiterStyle::Colon => ":",
            DelimiterStyle::Comma => ",",
            DelimiterStyle::Semicolon => ";",
            DelimiterStyle::LineFeed => "\n",
            DelimiterStyle::Crlf => "\r\n",
            DelimiterStyle::ZeroX => "0x",
            DelimiterStyle::BackslashX => "\\x",
            DelimiterStyle::None | DelimiterStyle::Auto => "",
        }
    }

    #[inline]
    pub fn is_prefix(self) -> bool {
        matches!(self, DelimiterStyle::ZeroX | DelimiterStyle::BackslashX)
    }

    #[inline]
    pub fn can_encode(self) -> bool {
        self != DelimiterStyle::Auto
    }
}

/// A fully parameterised codec. Selection is a plain `match`; there is no
/// dynamic lookup beyond the registry's id table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Codec {
    Base64,
    Hex(DelimiterStyle),
    Url,
    Base32,
    Rot13,
    Caesar { shift: u8 },
    Atbash,
    Substitution,
    Ascii85,
    SeededXor,
}

impl Codec {
    pub fn kind(&self) -> CodecKind {
        match self {
            Codec::Base64 => CodecKind::Base64,
            Codec::Hex(_) => CodecKind::Hex,
            Codec::Url => CodecKind::Url,
            Codec::Base32 => CodecKind::Base32,
            Codec::Rot13 => CodecKind::Rot13,
            Codec::Caesar { .. } => CodecKind::Caesar,
            Codec::Atbash => CodecKind::Atbash,
            Codec::Substitution => CodecKind::Substitution,
            Codec::Ascii85 => CodecKind::Ascii85,
            Codec::SeededXor => CodecKind::SeededXor,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// True when `encode` and `decode` are the same transform.
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, Codec::Rot13 | Codec::Atbash | Codec::SeededXor)
    }

    pub fn encode(&self, text: &str) -> Result<String, CodecError> {
        match *self {
            Codec::Base64 => Ok(base64::encode(text)),
            Codec::Hex(style) => hex::encode(text, style),
            Codec::Url => Ok(url::encode(text)),
            Codec::Base32 => Ok(base32::encode(text)),
            Codec::Rot13 => Ok(classical::rot13(text)),
            Codec::Caesar { shift } => Ok(classical::caesar_encode(text, shift)),
            Codec::Atbash => Ok(classical::atbash(text)),
            Codec::Substitution => Ok(classical::substitution_encode(text)),
            Codec::Ascii85 => Ok(ascii85::encode(text)),
            Codec::SeededXor => xor::apply(text),
        }
    }

    pub fn decode(&self, text: &str) -> Result<String, CodecError> {
        match *self {
            Codec::Base64 => base64::decode(text),
            Codec::Hex(style) => hex::decode(text, style),
            Codec::Url => url::decode(text),
            Codec::Base32 => base32::decode(text),
            Codec::Rot13 => Ok(classical::rot13(text)),
            Codec::Caesar { shift } => Ok(classical::caesar_decode(text, shift)),
            Codec::Atbash => Ok(classical::atbash(text)),
            Codec::Substitution => Ok(classical::substitution_decode(text)),
            Codec::Ascii85 => ascii85::decode(text),
            Codec::SeededXor => xor::apply(text),
        }
    }
}
