//! Assessment flow configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest pause allowed before the forms reset after sending.
pub const MAX_RESET_DELAY_MS: u64 = 10_000;

/// Timing of the assessment flow
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Pause after handing off to the mail client, before the forms reset
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl FlowConfig {
    /// Get the reset delay as a Duration
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Validate flow configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reset_delay_ms > MAX_RESET_DELAY_MS {
            return Err(ValidationError::ResetDelayTooLong {
                max_ms: MAX_RESET_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

fn default_reset_delay_ms() -> u64 {
    1000
}
