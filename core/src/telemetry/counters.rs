//! telemetry/counters.rs
//! Mutable counters collected while a chain runs.
//!
//! Converted into an immutable `ChainSnapshot` at the end of the run.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// One executed chain step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Position in the chain spec (not execution order).
    pub index: usize,
    pub codec_id: u16,
    pub codec: String,
    pub repeat: u8,
    pub input_len: usize,
    pub output_len: usize,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ChainCounters {
    pub steps: Vec<StepRecord>,
    /// Individual codec calls (sum of repeats).
    pub codec_applications: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl ChainCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for a run over `input_len` bytes. Until a step runs, the
    /// output is the input, so an empty chain reports `input_len` both ways.
    pub fn for_input(input_len: usize) -> Self {
        Self {
            bytes_in: input_len as u64,
            bytes_out: input_len as u64,
            ..Self::default()
        }
    }

    /// Record one finished step. `input_len`/`output_len` are UTF-8 byte lengths.
    pub fn add_step(
        &mut self,
        index: usize,
        codec_id: u16,
        codec: &str,
        repeat: u8,
        input_len: usize,
        output_len: usize,
    ) {
        if self.steps.is_empty() {
            self.bytes_in = input_len as u64;
        }
        self.codec_applications += repeat as u64;
        self.bytes_out = output_len as u64;
        self.steps.push(StepRecord {
            index,
            codec_id,
            codec: codec.to_string(),
            repeat,
            input_len,
            output_len,
        });
    }

    /// Output/input size ratio; 0.0 when nothing was processed.
    pub fn expansion_ratio(&self) -> f64 {
        if self.bytes_in == 0 {
            0.0
        } else {
            self.bytes_out as f64 / self.bytes_in as f64
        }
    }

    // Merges are for aggregating independent runs; step lists are concatenated.
    pub fn merge(&mut self, other: &ChainCounters) {
        self.steps.extend(other.steps.iter().cloned());
        self.codec_applications += other.codec_applications;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
    }
}

impl AddAssign for ChainCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
