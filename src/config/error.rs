//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid mail recipient address")]
    InvalidRecipient,

    #[error("Invalid booking URL: {0}")]
    InvalidBookingUrl(String),

    #[error("Booking URL must use HTTPS")]
    BookingUrlMustBeHttps,

    #[error("Reset delay exceeds maximum allowed ({max_ms} ms)")]
    ResetDelayTooLong { max_ms: u64 },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
