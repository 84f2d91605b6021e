//! telemetry/logging.rs
//! Opt-in `tracing` subscriber. The library itself only emits events.

use thiserror::Error;
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("logging init failed: {0}")]
    LoggingInit(String),
}

/// Install a fmt subscriber filtered at `level`; `RUST_LOG` takes precedence.
///
/// Fails if a global subscriber is already set, so callers that may run
/// twice (tests) should ignore the error.
///
/// Events go to stderr so they never interleave with a caller's stdout.
pub fn init_logging(level: &str) -> Result<(), TelemetryError> {
    init_logging_with_writer(level, std::io::stderr)
}

/// Same as [`init_logging`] with an explicit sink.
pub fn init_logging_with_writer<W>(level: &str, writer: W) -> Result<(), TelemetryError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| TelemetryError::LoggingInit(e.to_string()))
}
