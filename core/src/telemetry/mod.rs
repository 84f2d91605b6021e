//! telemetry/mod.rs
//! Chain counters, immutable run snapshots and log subscriber setup.
//!
//! Notes:
//! - Counters are plain values filled by the engine during one run; nothing
//!   is shared between runs.
//! - Snapshots are serde-serialisable so callers can ship them as JSON.

pub mod counters;
pub mod snapshot;
pub mod logging;

pub use counters::*;
pub use snapshot::*;
pub use logging::*;
