//! chain/types.rs
//! Chain steps, chain specs, run direction and the chain error type.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codecs::types::{CodecError, CodecKind};
use crate::constants::{MAX_REPEAT, MIN_REPEAT};
use crate::utils::enum_name_or_hex;

/// Which way a chain is run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

fn codec_label(codec_id: &u16) -> String {
    enum_name_or_hex::<CodecKind>(*codec_id)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Chain key does not match `id 'x' count ('-' id 'x' count)*`.
    #[error("invalid chain key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("step {index}: unknown codec {}", codec_label(.codec_id))]
    UnknownCodec { index: usize, codec_id: u16 },

    #[error("step {index}: repeat count {repeat} outside {}..={}", MIN_REPEAT, MAX_REPEAT)]
    InvalidRepeat { index: usize, repeat: u8 },

    /// A codec failed; no later step was run.
    #[error("step {index} ({codec}, id {codec_id}) failed to {direction}: {source}")]
    Step {
        index: usize,
        codec_id: u16,
        codec: &'static str,
        direction: Direction,
        #[source]
        source: CodecError,
    },
}

impl ChainError {
    /// The codec error behind a failed step, if any.
    pub fn codec_error(&self) -> Option<&CodecError> {
        match self {
            ChainError::Step { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One pipeline stage: apply codec `codec_id` `repeat` times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainStep {
    pub codec_id: u16,
    pub repeat: u8,
}

impl ChainStep {
    /// Build a step, checking `repeat` is within `MIN_REPEAT..=MAX_REPEAT`.
    pub fn new(codec_id: u16, repeat: u8) -> Result<Self, ChainError> {
        if !(MIN_REPEAT..=MAX_REPEAT).contains(&repeat) {
            return Err(ChainError::InvalidRepeat { index: 0, repeat });
        }
        Ok(Self { codec_id, repeat })
    }

    #[inline]
    pub fn once(codec_id: u16) -> Self {
        Self { codec_id, repeat: 1 }
    }
}

/// Ordered list of steps. Order is the encode order; decode walks it backwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainSpec {
    steps: Vec<ChainStep>,
}

impl ChainSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<ChainStep>) -> Self {
        Self { steps }
    }

    /// Builder-style append.
    pub fn then(mut self, codec_id: u16, repeat: u8) -> Self {
        self.steps.push(ChainStep { codec_id, repeat });
        self
    }

    pub fn push(&mut self, step: ChainStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<Vec<ChainStep>> for ChainSpec {
    fn from(steps: Vec<ChainStep>) -> Self {
        Self::from_steps(steps)
    }
}
