//! Appointment booking configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// External appointment booking page
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Page opened by the "book appointment" action
    #[serde(default = "default_booking_url")]
    pub url: String,
}

impl BookingConfig {
    /// Parse the booking URL
    pub fn parsed_url(&self) -> Result<Url, ValidationError> {
        Url::parse(self.url.trim()).map_err(|e| ValidationError::InvalidBookingUrl(e.to_string()))
    }

    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("BOOKING__URL"));
        }
        let url = self.parsed_url()?;
        if url.scheme() != "https" {
            return Err(ValidationError::BookingUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            url: default_booking_url(),
        }
    }
}

fn default_booking_url() -> String {
    "https://outlook.office365.com/book/TreScottAgencyCOUNTRYFinancial@countryfinancial.com/?RefID=rep_bio&ismsaljsauthenabled=true".to_string()
}
