//! chain/key.rs
//! Compact chain keys: `id 'x' count ('-' id 'x' count)*`, or `empty`.
//!
//! The strict parser only accepts canonical keys (plain decimal, no leading
//! zeros, no signs, counts in 1..=10), so every accepted key serialises back
//! to the same bytes. The lenient parser reproduces the historical
//! behaviour of defaulting bad ids to 0 and bad counts to 1.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::chain::types::{ChainError, ChainSpec, ChainStep};
use crate::config::KeyParsing;
use crate::constants::{EMPTY_CHAIN_KEY, MAX_REPEAT, MIN_REPEAT};

const STEP_SEP: char = '-';
const COUNT_SEP: char = 'x';

impl ChainSpec {
    /// Serialise to the compact key form.
    pub fn to_key(&self) -> String {
        if self.is_empty() {
            return EMPTY_CHAIN_KEY.to_string();
        }
        self.steps()
            .iter()
            .map(|s| format!("{}{}{}", s.codec_id, COUNT_SEP, s.repeat))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Strict parse; any malformed part fails the whole key.
    pub fn parse(key: &str) -> Result<Self, ChainError> {
        if key == EMPTY_CHAIN_KEY {
            return Ok(Self::new());
        }
        if key.is_empty() {
            return Err(invalid(key, "key is empty"));
        }

        let mut steps = Vec::new();
        for (index, part) in key.split(STEP_SEP).enumerate() {
            let (id_str, count_str) = part
                .split_once(COUNT_SEP)
                .ok_or_else(|| invalid(key, format!("step {index} {part:?} has no '{COUNT_SEP}'")))?;

            let codec_id: u16 = parse_canonical(id_str)
                .ok_or_else(|| invalid(key, format!("step {index} has bad codec id {id_str:?}")))?;
            let repeat: u8 = parse_canonical(count_str)
                .ok_or_else(|| invalid(key, format!("step {index} has bad count {count_str:?}")))?;

            if !(MIN_REPEAT..=MAX_REPEAT).contains(&repeat) {
                return Err(invalid(
                    key,
                    format!("step {index} count {repeat} outside {MIN_REPEAT}..={MAX_REPEAT}"),
                ));
            }
            steps.push(ChainStep { codec_id, repeat });
        }

        Ok(Self::from_steps(steps))
    }

    /// Historical parse: never fails, substitutes defaults and logs each one.
    pub fn parse_lenient(key: &str) -> Self {
        if key == EMPTY_CHAIN_KEY {
            return Self::new();
        }

        let steps = key
            .split(STEP_SEP)
            .enumerate()
            .map(|(index, part)| {
                let mut pieces = part.split(COUNT_SEP);
                let id_str = pieces.next().unwrap_or("");
                let count_str = pieces.next();

                let codec_id = match leading_number(id_str).and_then(|n| u16::try_from(n).ok()) {
                    Some(id) => id,
                    None => {
                        warn!(index, part, "chain key: unparseable codec id, defaulting to 0");
                        0
                    }
                };

                let repeat = match count_str.and_then(leading_number) {
                    Some(n) if n >= MIN_REPEAT as u64 => n.min(MAX_REPEAT as u64) as u8,
                    _ => {
                        warn!(index, part, "chain key: missing or bad count, defaulting to 1");
                        MIN_REPEAT
                    }
                };

                ChainStep { codec_id, repeat }
            })
            .collect();

        Self::from_steps(steps)
    }

    pub fn parse_with(key: &str, mode: KeyParsing) -> Result<Self, ChainError> {
        match mode {
            KeyParsing::Strict => Self::parse(key),
            KeyParsing::Lenient => Ok(Self::parse_lenient(key)),
        }
    }
}

impl fmt::Display for ChainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl FromStr for ChainSpec {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> ChainError {
    ChainError::InvalidKey { key: key.to_string(), reason: reason.into() }
}

/// Plain decimal with no sign and no leading zeros (except "0" itself).
fn parse_canonical<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

/// Leading-digit prefix as a number (`"12abc"` -> 12), saturating on overflow.
fn leading_number(s: &str) -> Option<u64> {
    let digits: &str = {
        let end = s.bytes().take_while(|b| b.is_ascii_digit()).count();
        &s[..end]
    };
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}
