//! EmailDraft - the prefilled results email handed to the user's mail client.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use super::session_result::SessionResult;
use crate::domain::foundation::ValidationError;
use crate::domain::protection::form_fields::{
    FormFields, REQUIRED_EMAIL_FIELDS, USER_EMAIL, USER_NAME,
};

/// Characters `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `COMPONENT` plus the address separators.
const ADDRESS: &AsciiSet = &COMPONENT.remove(b'@').remove(b'+');

/// Name and address from the email form. Neither is validated beyond presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub user_name: String,
    pub user_email: String,
}

impl ContactDetails {
    /// Reads contact details from the email form.
    ///
    /// # Errors
    ///
    /// - `EmptyFields` listing the blank required fields
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        let missing = fields.missing(REQUIRED_EMAIL_FIELDS);
        if !missing.is_empty() {
            return Err(ValidationError::empty_fields(missing));
        }
        Ok(Self {
            user_name: fields.get_or_empty(USER_NAME).trim().to_string(),
            user_email: fields.get_or_empty(USER_EMAIL).trim().to_string(),
        })
    }
}

/// Plain-text email summarising one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Lays out the summary of `result` for `contact`, addressed to `recipient`.
    pub fn compose(recipient: impl Into<String>, contact: &ContactDetails, result: &SessionResult) -> Self {
        let inputs = result.inputs();
        let name = &contact.user_name;

        let body = format!(
            "MyProtection Number Results\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             \n\
             ASSET INFORMATION:\n\
             - Home Value: {home}\n\
             - Vehicle Value: {vehicle}\n\
             - Savings & Investments: {savings}\n\
             - Annual Household Income: {income}\n\
             - Life Insurance: {life}\n\
             - Current Auto Coverage: {coverage}\n\
             \n\
             RESULTS:\n\
             - Total Protection Exposure: {exposure}\n\
             - Recommended Coverage: {tier}\n\
             - Gap Analysis: {gap}\n\
             \n\
             Next Steps: {message}\n\
             \n\
             This analysis was generated by the MyProtection educational tool.\n\
             This is not a quote, offer, or guarantee of coverage.\n\
             \n\
             Best regards,\n\
             {name}",
            name = name,
            email = contact.user_email,
            home = inputs.home_value,
            vehicle = inputs.vehicle_value,
            savings = inputs.savings_value,
            income = inputs.income_value,
            life = inputs.life_insurance,
            coverage = inputs.current_coverage,
            exposure = result.exposure(),
            tier = result.recommendation().coverage_tier.label(),
            gap = result.gap_verdict().label(),
            message = result.recommendation().advisory_message,
        );

        Self {
            recipient: recipient.into(),
            subject: format!("MyProtection Number Results - {}", name),
            body,
        }
    }

    /// Builds the `mailto:` link carrying subject and body.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the recipient makes the link unparseable.
    pub fn mailto_url(&self) -> Result<Url, url::ParseError> {
        let link = format!(
            "mailto:{}?subject={}&body={}",
            utf8_percent_encode(self.recipient.trim(), ADDRESS),
            utf8_percent_encode(&self.subject, COMPONENT),
            utf8_percent_encode(&self.body, COMPONENT),
        );
        Url::parse(&link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protection::{AssetInputs, CurrentCoverage};

    fn contact() -> ContactDetails {
        ContactDetails {
            user_name: "Jane Doe".to_string(),
            user_email: "jane@example.com".to_string(),
        }
    }

    fn result() -> SessionResult {
        let inputs = AssetInputs::new(300000.0, 20000.0, 50000.0, 80000.0, CurrentCoverage::Limits100_300)
            .with_life_insurance(250000.0);
        SessionResult::assess(inputs)
    }

    #[test]
    fn contact_details_require_name_and_email() {
        let err = ContactDetails::from_fields(&FormFields::new().with(USER_NAME, "Jane")).unwrap_err();
        assert_eq!(err.fields(), vec![USER_EMAIL]);

        let err = ContactDetails::from_fields(&FormFields::new()).unwrap_err();
        assert_eq!(err.fields(), vec![USER_NAME, USER_EMAIL]);
    }

    #[test]
    fn contact_details_trim_values() {
        let fields = FormFields::new()
            .with(USER_NAME, " Jane Doe ")
            .with(USER_EMAIL, "jane@example.com ");
        assert_eq!(ContactDetails::from_fields(&fields).unwrap(), contact());
    }

    #[test]
    fn subject_names_the_user() {
        let draft = EmailDraft::compose("agent@example.com", &contact(), &result());
        assert_eq!(draft.subject, "MyProtection Number Results - Jane Doe");
        assert_eq!(draft.recipient, "agent@example.com");
    }

    #[test]
    fn body_lists_inputs_and_results() {
        let draft = EmailDraft::compose("agent@example.com", &contact(), &result());
        let lines: Vec<&str> = draft.body.lines().collect();

        assert_eq!(lines[0], "MyProtection Number Results");
        assert_eq!(lines[2], "Name: Jane Doe");
        assert_eq!(lines[3], "Email: jane@example.com");
        assert!(lines.contains(&"- Home Value: $300,000"));
        assert!(lines.contains(&"- Vehicle Value: $20,000"));
        assert!(lines.contains(&"- Savings & Investments: $50,000"));
        assert!(lines.contains(&"- Annual Household Income: $80,000"));
        assert!(lines.contains(&"- Life Insurance: $250,000"));
        assert!(lines.contains(&"- Current Auto Coverage: 100/300"));
        assert!(lines.contains(&"- Total Protection Exposure: $450,000"));
        assert!(lines.contains(&"- Recommended Coverage: 500/500"));
        assert!(lines.contains(&"- Gap Analysis: Insufficient coverage"));
        assert!(lines.contains(&"Next Steps: Higher limits recommended for better protection"));
        assert_eq!(lines[lines.len() - 2], "Best regards,");
        assert_eq!(lines[lines.len() - 1], "Jane Doe");
    }

    #[test]
    fn mailto_encodes_like_uri_components() {
        let draft = EmailDraft {
            recipient: "agent@example.com".to_string(),
            subject: "Results - Jane & Co".to_string(),
            body: "Line one\nIt's (100%)!".to_string(),
        };

        let url = draft.mailto_url().unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), "agent@example.com");
        assert_eq!(
            url.query(),
            Some("subject=Results%20-%20Jane%20%26%20Co&body=Line%20one%0AIt's%20(100%25)!")
        );
    }

    #[test]
    fn mailto_encodes_non_ascii_as_utf8() {
        let draft = EmailDraft {
            recipient: "agent@example.com".to_string(),
            subject: "José".to_string(),
            body: String::new(),
        };

        let url = draft.mailto_url().unwrap();
        assert_eq!(url.query(), Some("subject=Jos%C3%A9&body="));
    }

    #[test]
    fn mailto_recipient_cannot_add_headers() {
        let draft = EmailDraft {
            recipient: " agent@example.com?cc=spy@evil.com".to_string(),
            subject: "Hi".to_string(),
            body: "x".to_string(),
        };

        let url = draft.mailto_url().unwrap();
        assert_eq!(url.path(), "agent@example.com%3Fcc%3Dspy@evil.com");
        assert_eq!(url.query(), Some("subject=Hi&body=x"));
    }
}
