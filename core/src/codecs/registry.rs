//! codecs/registry.rs
//! Codec registry: stable id -> codec record.
//!
//! Built once per configuration and never mutated afterwards. `standard()`
//! is the process-wide default used by the free chain functions.

use std::sync::OnceLock;

use crate::codecs::types::{Codec, CodecKind};
use crate::config::CodecConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub id: u16,
    pub name: &'static str,
    pub codec: Codec,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    // Indexed by id; ids are dense from 0.
    entries: Vec<CodecInfo>,
}

impl Registry {
    /// Build a registry with the parameterised codecs taken from `config`.
    ///
    /// `config` is assumed validated; a non-encodable hex style is replaced
    /// by the default so the registry never carries a decode-only codec.
    pub fn from_config(config: &CodecConfig) -> Self {
        let hex_style = if config.hex_style.can_encode() {
            config.hex_style
        } else {
            Default::default()
        };

        let entries = CodecKind::ALL
            .iter()
            .map(|&kind| {
                let codec = match kind {
                    CodecKind::Base64 => Codec::Base64,
                    CodecKind::Hex => Codec::Hex(hex_style),
                    CodecKind::Url => Codec::Url,
                    CodecKind::Base32 => Codec::Base32,
                    CodecKind::Rot13 => Codec::Rot13,
                    CodecKind::Caesar => Codec::Caesar { shift: config.caesar_shift % 26 },
                    CodecKind::Atbash => Codec::Atbash,
                    CodecKind::Substitution => Codec::Substitution,
                    CodecKind::Ascii85 => Codec::Ascii85,
                    CodecKind::SeededXor => Codec::SeededXor,
                };
                CodecInfo { id: kind.id(), name: kind.name(), codec }
            })
            .collect();

        Self { entries }
    }

    /// Shared default registry (Hex with spaces, Caesar shift 3).
    pub fn standard() -> &'static Registry {
        static STANDARD: OnceLock<Registry> = OnceLock::new();
        STANDARD.get_or_init(|| Registry::from_config(&CodecConfig::default()))
    }

    pub fn get(&self, codec_id: u16) -> Option<&CodecInfo> {
        self.entries
            .get(codec_id as usize)
            .filter(|info| info.id == codec_id)
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &CodecInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up `codec_id` in the standard registry.
pub fn resolve(codec_id: u16) -> Option<&'static CodecInfo> {
    Registry::standard().get(codec_id)
}
