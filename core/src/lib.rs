//! cryptify-core
//!
//! Reversible text transforms (encodings, letter ciphers, a toy XOR cipher,
//! an ECB block cipher), one-way hashes, and a chain engine that composes
//! registry codecs into a repeatable pipeline named by a compact key.
//!
//! Nothing here is meant to keep secrets. Several transforms are insecure on
//! purpose and stay bit-compatible with their historical definitions.
//!
//! ```
//! use cryptify_core::prelude::*;
//!
//! let spec: ChainSpec = "0x1-2x2".parse().unwrap();
//! let encoded = chain::encode("SECURE", &spec).unwrap();
//! assert_eq!(chain::decode(&encoded, &spec).unwrap(), "SECURE");
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod utils;

pub mod codecs;
pub mod crypto;
pub mod telemetry;

// Pipeline layer
pub mod chain;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::chain::{self, ChainEngine, ChainError, ChainSpec, ChainStep, Direction};
    pub use crate::codecs::{Codec, CodecError, CodecInfo, CodecKind, DelimiterStyle, Registry};
    pub use crate::config::{CodecConfig, KeyParsing};
    pub use crate::constants::codec_ids;
    pub use crate::crypto::{hash_hex, BlockKey, EcbCipher, HashAlg};
    pub use crate::utils::{from_bytes, to_bytes};
}
