//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Failure to install the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Returns an error if
/// a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?,
    };

    let fmt_layer = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInstalled(e.to_string()))
}
