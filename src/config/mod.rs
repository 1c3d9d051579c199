//! Application configuration module
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `MYPROTECTION` prefix and nested values
//! are separated by double underscores. Every section has defaults, so an empty
//! environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use myprotection::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Results are emailed to {}", config.mail.recipient);
//! ```

mod booking;
mod error;
mod flow;
mod logging;
mod mail;

pub use booking::BookingConfig;
pub use error::{ConfigError, ValidationError};
pub use flow::{FlowConfig, MAX_RESET_DELAY_MS};
pub use logging::{LoggingConfig, Verbosity};
pub use mail::MailConfig;

use serde::Deserialize;
use url::Url;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Results email recipient
    #[serde(default)]
    pub mail: MailConfig,

    /// Appointment booking page
    #[serde(default)]
    pub booking: BookingConfig,

    /// Assessment flow timing
    #[serde(default)]
    pub flow: FlowConfig,

    /// Logging and diagnostic verbosity
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MYPROTECTION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MYPROTECTION__MAIL__RECIPIENT=agent@example.com` -> `mail.recipient`
    /// - `MYPROTECTION__FLOW__RESET_DELAY_MS=0` -> `flow.reset_delay_ms = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MYPROTECTION")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.mail.validate()?;
        self.booking.validate()?;
        self.flow.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Parsed booking page URL
    pub fn booking_url(&self) -> Result<Url, ValidationError> {
        self.booking.parsed_url()
    }
}
