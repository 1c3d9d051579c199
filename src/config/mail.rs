//! Mail hand-off configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where emailed results are addressed
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Fixed recipient of every results email
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

impl MailConfig {
    /// Validate mail configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let recipient = self.recipient.trim();
        if recipient.is_empty() {
            return Err(ValidationError::MissingRequired("MAIL__RECIPIENT"));
        }
        if recipient
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#' | '%'))
        {
            return Err(ValidationError::InvalidRecipient);
        }
        match recipient.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ValidationError::InvalidRecipient),
        }
    }

    /// The recipient without surrounding whitespace
    pub fn address(&self) -> &str {
        self.recipient.trim()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
        }
    }
}

fn default_recipient() -> String {
    "Tre.Scott@countryfinancial.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_defaults() {
        let config = MailConfig::default();
        assert_eq!(config.recipient, "Tre.Scott@countryfinancial.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_recipient() {
        let config = MailConfig {
            recipient: "  ".to_string(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("MAIL__RECIPIENT"))
        );
    }

    #[test]
    fn test_validation_invalid_recipient() {
        for recipient in ["agent", "@example.com", "agent@localhost"] {
            let config = MailConfig {
                recipient: recipient.to_string(),
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidRecipient),
                "{}",
                recipient
            );
        }
    }

    #[test]
    fn test_validation_rejects_link_syntax_in_recipient() {
        for recipient in [
            "agent@example.com?cc=spy@evil.com",
            "agent@example.com&bcc=spy@evil.com",
            "agent@example.com#top",
            "agent%40example.com@example.com",
            "agent @example.com",
            "agent@exa\tmple.com",
            "agent@example.com@evil.com",
        ] {
            let config = MailConfig {
                recipient: recipient.to_string(),
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidRecipient),
                "{}",
                recipient
            );
        }
    }

    #[test]
    fn test_padded_recipient_is_valid_and_trimmed() {
        let config = MailConfig {
            recipient: " agent@example.com\n".to_string(),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.address(), "agent@example.com");
    }
}
