//! crypto/hash.rs
//! One-way hashes rendered as lowercase hex.
//!
//! The primitives are opaque; this module only selects one and formats the
//! output. Hashes have no inverse and are therefore not registry codecs.

use std::convert::TryFrom;

use digest::Digest;
use md5::Md5;
use num_enum::TryFromPrimitive;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use sha3::Sha3_256;

/// Supported hash algorithms (extensible).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum HashAlg {
    Md5     = 0x0001,
    Sha1    = 0x0002,
    Sha256  = 0x0003,
    Sha512  = 0x0004,
    Sha3_256 = 0x0005,
    Blake3  = 0x0006, // UNKEYED Blake3
}

impl HashAlg {
    pub const ALL: [HashAlg; 6] = [
        HashAlg::Md5,
        HashAlg::Sha1,
        HashAlg::Sha256,
        HashAlg::Sha512,
        HashAlg::Sha3_256,
        HashAlg::Blake3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashAlg::Md5 => "MD5",
            HashAlg::Sha1 => "SHA-1",
            HashAlg::Sha256 => "SHA-256",
            HashAlg::Sha512 => "SHA-512",
            HashAlg::Sha3_256 => "SHA3-256",
            HashAlg::Blake3 => "BLAKE3",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlg::Md5 => 16,
            HashAlg::Sha1 => 20,
            HashAlg::Sha256 | HashAlg::Sha3_256 | HashAlg::Blake3 => 32,
            HashAlg::Sha512 => 64,
        }
    }

    pub fn from_id(id: u16) -> Option<Self> {
        HashAlg::try_from(id).ok()
    }
}

#[inline]
fn digest_hex<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

pub fn hash_bytes_hex(alg: HashAlg, data: &[u8]) -> String {
    match alg {
        HashAlg::Md5 => digest_hex::<Md5>(data),
        HashAlg::Sha1 => digest_hex::<Sha1>(data),
        HashAlg::Sha256 => digest_hex::<Sha256>(data),
        HashAlg::Sha512 => digest_hex::<Sha512>(data),
        HashAlg::Sha3_256 => digest_hex::<Sha3_256>(data),
        HashAlg::Blake3 => blake3::hash(data).to_hex().to_string(),
    }
}

/// Hash the UTF-8 bytes of `text`.
pub fn hash_hex(alg: HashAlg, text: &str) -> String {
    hash_bytes_hex(alg, text.as_bytes())
}
