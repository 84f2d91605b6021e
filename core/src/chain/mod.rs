//! chain/mod.rs
//! Ordered, repeatable codec pipelines addressed by a compact key.

pub mod types;
pub mod key;
pub mod engine;

pub use types::*;
pub use engine::*;

/// Encode `text` through `spec` using the standard registry.
pub fn encode(text: &str, spec: &ChainSpec) -> Result<String, ChainError> {
    ChainEngine::standard().encode(text, spec)
}

/// Decode `text` through `spec` (steps reversed) using the standard registry.
pub fn decode(text: &str, spec: &ChainSpec) -> Result<String, ChainError> {
    ChainEngine::standard().decode(text, spec)
}
