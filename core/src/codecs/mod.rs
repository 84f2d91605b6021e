//! codecs/mod.rs
//! Stateless text transforms and the id registry that enumerates them.
//!
//! Notes:
//! - Every codec is a pure function of its input; nothing here holds state.
//! - Byte-oriented codecs go through the UTF-8 bridge in `utils`.
//! - The registry is the only place that lists all variants.

pub mod types;
pub mod registry;

pub mod ascii85;
pub mod base32;
pub mod base64;
pub mod classical;
pub mod hex;
pub mod url;
pub mod xor;

pub use types::*;
pub use registry::*;
