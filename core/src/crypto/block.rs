//! crypto/block.rs
//! AES-128 in ECB mode with length-derived padding.
//!
//! Compatibility notes (do not "fix"):
//! - ECB: every 16-byte block is encrypted independently, so equal plaintext
//!   blocks give equal ciphertext blocks.
//! - Padding adds `padded_len - len` bytes of that value, and adds **nothing**
//!   when the input is already block aligned. Strict PKCS7 would add a full
//!   block there.
//! - Unpadding is lenient: the trailing pad is removed only if the last byte
//!   is in 1..=16 and all claimed pad bytes match; otherwise the plaintext is
//!   returned as-is. An aligned plaintext that happens to end in such a
//!   pattern loses those bytes on decrypt.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Block};
use tracing::trace;

use crate::codecs::types::CodecError;
use crate::constants::BLOCK_LEN;
use crate::crypto::types::BlockKey;
use crate::utils::from_bytes;

const CODEC: &str = "ecb";

/// Pad `data` up to the next multiple of `BLOCK_LEN`.
pub fn pad_to_block(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(BLOCK_LEN) * BLOCK_LEN;
    let pad = padded_len - data.len();

    let mut out = Vec::with_capacity(padded_len);
    out.extend_from_slice(data);
    out.resize(padded_len, pad as u8);
    out
}

/// Remove trailing pad bytes if they form a valid pad; otherwise return `data` unchanged.
pub fn strip_padding_lenient(mut data: Vec<u8>) -> Vec<u8> {
    let Some(&last) = data.last() else {
        return data;
    };
    let pad = last as usize;
    if (1..=BLOCK_LEN).contains(&pad)
        && pad <= data.len()
        && data[data.len() - pad..].iter().all(|&b| b == last)
    {
        data.truncate(data.len() - pad);
    }
    data
}

#[derive(Clone)]
pub struct EcbCipher {
    cipher: Aes128,
}

impl EcbCipher {
    pub fn new(key: &BlockKey) -> Self {
        Self { cipher: Aes128::new(GenericArray::from_slice(key.as_bytes())) }
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut buf = pad_to_block(plaintext);
        for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
            self.cipher.encrypt_block(Block::from_mut_slice(chunk));
        }
        trace!(plaintext_len = plaintext.len(), blocks = buf.len() / BLOCK_LEN, "ecb encrypt");
        buf
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CodecError> {
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(CodecError::decode(
                CODEC,
                format!(
                    "ciphertext length {} is not a multiple of {}",
                    ciphertext.len(),
                    BLOCK_LEN
                ),
            ));
        }

        let mut buf = ciphertext.to_vec();
        for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
            self.cipher.decrypt_block(Block::from_mut_slice(chunk));
        }
        trace!(blocks = buf.len() / BLOCK_LEN, "ecb decrypt");
        Ok(strip_padding_lenient(buf))
    }

    /// Encrypt UTF-8 text; ciphertext is returned as standard Base64.
    pub fn encrypt_text(&self, text: &str) -> String {
        STANDARD.encode(self.encrypt(text.as_bytes()))
    }

    pub fn decrypt_text(&self, encoded: &str) -> Result<String, CodecError> {
        let ciphertext = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CodecError::decode(CODEC, format!("ciphertext is not base64: {e}")))?;
        from_bytes(self.decrypt(&ciphertext)?)
    }
}
