//! crypto/mod.rs
//! Block cipher, block keys and one-way hashes.

pub mod types;
pub mod block;
pub mod hash;

pub use types::*;
pub use block::*;
pub use hash::*;
