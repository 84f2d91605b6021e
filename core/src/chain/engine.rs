//! chain/engine.rs
//! Runs a `ChainSpec` against a registry.
//!
//! Design:
//! - Encode walks the steps in list order, decode in reverse, each step
//!   applied `repeat` times. Reversal guarantees every decode step sees
//!   exactly what its paired encode step produced.
//! - The whole spec is validated (known ids, repeat bounds) before the
//!   first codec runs.
//! - The first failing codec stops the run; the error carries the step
//!   index and codec id.
//! - The engine owns only an immutable registry; specs are borrowed per call.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::{debug, warn};

use crate::chain::types::{ChainError, ChainSpec, Direction};
use crate::codecs::registry::{CodecInfo, Registry};
use crate::config::{CodecConfig, KeyParsing};
use crate::constants::{MAX_REPEAT, MIN_REPEAT};
use crate::telemetry::{ChainCounters, ChainSnapshot};

#[derive(Clone, Debug)]
pub struct ChainEngine {
    registry: Registry,
    key_parsing: KeyParsing,
}

impl ChainEngine {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            registry: Registry::from_config(config),
            key_parsing: config.key_parsing,
        }
    }

    pub fn with_registry(registry: Registry, key_parsing: KeyParsing) -> Self {
        Self { registry, key_parsing }
    }

    /// Shared engine over the standard registry with strict key parsing.
    pub fn standard() -> &'static ChainEngine {
        static STANDARD: OnceLock<ChainEngine> = OnceLock::new();
        STANDARD.get_or_init(|| {
            ChainEngine::with_registry(Registry::standard().clone(), KeyParsing::Strict)
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn key_parsing(&self) -> KeyParsing {
        self.key_parsing
    }

    pub fn encode(&self, text: &str, spec: &ChainSpec) -> Result<String, ChainError> {
        self.run(text, spec, Direction::Encode)
    }

    pub fn decode(&self, text: &str, spec: &ChainSpec) -> Result<String, ChainError> {
        self.run(text, spec, Direction::Decode)
    }

    pub fn run(&self, text: &str, spec: &ChainSpec, direction: Direction) -> Result<String, ChainError> {
        let mut counters = ChainCounters::new();
        self.execute(text, spec, direction, &mut counters)
    }

    /// Parse `key` with the configured `KeyParsing` mode and run it.
    pub fn run_key(&self, text: &str, key: &str, direction: Direction) -> Result<String, ChainError> {
        let spec = ChainSpec::parse_with(key, self.key_parsing)?;
        self.run(text, &spec, direction)
    }

    pub fn encode_traced(&self, text: &str, spec: &ChainSpec) -> Result<(String, ChainSnapshot), ChainError> {
        self.run_traced(text, spec, Direction::Encode)
    }

    pub fn decode_traced(&self, text: &str, spec: &ChainSpec) -> Result<(String, ChainSnapshot), ChainError> {
        self.run_traced(text, spec, Direction::Decode)
    }

    fn run_traced(
        &self,
        text: &str,
        spec: &ChainSpec,
        direction: Direction,
    ) -> Result<(String, ChainSnapshot), ChainError> {
        let started = Instant::now();
        let mut counters = ChainCounters::for_input(text.len());
        let output = self.execute(text, spec, direction, &mut counters)?;
        let snapshot = ChainSnapshot::from(&counters, direction, spec.to_key(), started.elapsed());
        Ok((output, snapshot))
    }

    /// Resolve every step up front so a bad spec never half-runs.
    fn plan<'a>(&'a self, spec: &ChainSpec) -> Result<Vec<(usize, &'a CodecInfo, u8)>, ChainError> {
        spec.steps()
            .iter()
            .enumerate()
            .map(|(index, step)| {
                if !(MIN_REPEAT..=MAX_REPEAT).contains(&step.repeat) {
                    return Err(ChainError::InvalidRepeat { index, repeat: step.repeat });
                }
                let info = self
                    .registry
                    .get(step.codec_id)
                    .ok_or(ChainError::UnknownCodec { index, codec_id: step.codec_id })?;
                Ok((index, info, step.repeat))
            })
            .collect()
    }

    fn execute(
        &self,
        text: &str,
        spec: &ChainSpec,
        direction: Direction,
        counters: &mut ChainCounters,
    ) -> Result<String, ChainError> {
        let mut plan = self.plan(spec)?;
        if direction == Direction::Decode {
            plan.reverse();
        }

        let mut current = text.to_string();
        for (index, info, repeat) in plan {
            let input_len = current.len();
            for _ in 0..repeat {
                let applied = match direction {
                    Direction::Encode => info.codec.encode(&current),
                    Direction::Decode => info.codec.decode(&current),
                };
                current = applied.map_err(|source| {
                    warn!(index, codec_id = info.id, codec = info.name, %direction, error = %source, "chain step failed");
                    ChainError::Step {
                        index,
                        codec_id: info.id,
                        codec: info.name,
                        direction,
                        source,
                    }
                })?;
            }

            debug!(
                index,
                codec_id = info.id,
                codec = info.name,
                repeat,
                input_len,
                output_len = current.len(),
                %direction,
                "chain step applied"
            );
            counters.add_step(index, info.id, info.name, repeat, input_len, current.len());
        }

        Ok(current)
    }
}
