//! config.rs
//! Codec and chain-engine configuration.
//!
//! All fields default, so `{}` is a valid config document. Settings are plain
//! values handed to `Registry::from_config` / `ChainEngine::new`; nothing here
//! is global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codecs::types::DelimiterStyle;
use crate::constants::DEFAULT_CAESAR_SHIFT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How chain keys are parsed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyParsing {
    /// Reject malformed keys with `ChainError::InvalidKey`.
    #[default]
    Strict,
    /// Substitute id 0 / count 1 for unparseable parts.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Delimiter used by registry id 1 (Hex).
    pub hex_style: DelimiterStyle,
    /// Shift used by registry id 5 (Caesar); reduced mod 26.
    pub caesar_shift: u8,
    pub key_parsing: KeyParsing,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hex_style: DelimiterStyle::Space,
            caesar_shift: DEFAULT_CAESAR_SHIFT,
            key_parsing: KeyParsing::Strict,
        }
    }
}

impl CodecConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.hex_style.can_encode() {
            return Err(ConfigError::Invalid(
                "hex_style Auto is decode-only and cannot back a registry codec".into(),
            ));
        }
        Ok(())
    }
}
