//! telemetry/snapshot.rs
//! Immutable summary of one chain run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chain::types::Direction;
use crate::telemetry::counters::{ChainCounters, StepRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub direction: Direction,
    /// Compact key of the chain that ran.
    pub key: String,
    pub steps: Vec<StepRecord>,
    pub codec_applications: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub expansion_ratio: f64,
    pub elapsed: Duration,
}

impl ChainSnapshot {
    pub fn from(
        counters: &ChainCounters,
        direction: Direction,
        key: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            direction,
            key,
            steps: counters.steps.clone(),
            codec_applications: counters.codec_applications,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            expansion_ratio: counters.expansion_ratio(),
            elapsed,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
