//! crypto/types.rs
//! 16-byte block-cipher keys: parsing, generation and text derivation.

use std::fmt;

use digest::Digest as _;
use md5::Md5;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::codecs::types::CodecError;
use crate::constants::{BLOCK_KEY_HEX_LEN, BLOCK_KEY_LEN};

/// 16-byte key for the ECB block cipher.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockKey([u8; BLOCK_KEY_LEN]);

impl BlockKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let key: [u8; BLOCK_KEY_LEN] = bytes.try_into().map_err(|_| {
            CodecError::Configuration(format!(
                "block key must be {} bytes, got {}",
                BLOCK_KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Parse a 32-character hex key. Inline spaces are ignored.
    pub fn from_hex(hex_key: &str) -> Result<Self, CodecError> {
        let compact: String = hex_key.chars().filter(|c| *c != ' ').collect();
        if compact.len() != BLOCK_KEY_HEX_LEN {
            return Err(CodecError::Configuration(format!(
                "block key must be {} hex characters, got {}",
                BLOCK_KEY_HEX_LEN,
                compact.chars().count()
            )));
        }
        let bytes = hex::decode(&compact)
            .map_err(|e| CodecError::Configuration(format!("block key is not hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Fresh key from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut key = [0u8; BLOCK_KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Deterministic key from arbitrary text: the MD5 digest of its UTF-8 bytes.
    ///
    /// **NOT A KEY DERIVATION FUNCTION.** There is no salt and no work factor;
    /// anyone who can guess the text has the key. It exists only so the same
    /// passphrase always yields the same key.
    pub fn derive_from_text(text: &str) -> Self {
        let digest = Md5::digest(text.as_bytes());
        let mut key = [0u8; BLOCK_KEY_LEN];
        key.copy_from_slice(&digest);
        Self(key)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; BLOCK_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockKey(..)")
    }
}

impl std::str::FromStr for BlockKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
