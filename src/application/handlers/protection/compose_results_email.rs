//! ComposeResultsEmailHandler - turns a result and contact details into a mail draft.

use crate::domain::protection::FormFields;
use crate::domain::session::{ContactDetails, EmailDraft, SessionError, SessionResult};

/// Command to compose the results email.
#[derive(Debug, Clone)]
pub struct ComposeResultsEmailCommand {
    pub contact_fields: FormFields,
}

/// Result of composing the results email.
#[derive(Debug, Clone)]
pub struct ComposeResultsEmailResult {
    pub contact: ContactDetails,
    pub draft: EmailDraft,
}

/// Handler for composing results emails, always addressed to one recipient.
pub struct ComposeResultsEmailHandler {
    recipient: String,
}

impl ComposeResultsEmailHandler {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Composes the draft for `result`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredFields` if name or address is blank
    pub fn handle(
        &self,
        cmd: ComposeResultsEmailCommand,
        result: &SessionResult,
    ) -> Result<ComposeResultsEmailResult, SessionError> {
        let contact = ContactDetails::from_fields(&cmd.contact_fields)?;
        let draft = EmailDraft::compose(self.recipient.clone(), &contact, result);
        Ok(ComposeResultsEmailResult { contact, draft })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protection::form_fields::{USER_EMAIL, USER_NAME};
    use crate::domain::protection::{AssetInputs, CurrentCoverage};

    fn result() -> SessionResult {
        SessionResult::assess(AssetInputs::new(
            50000.0,
            0.0,
            0.0,
            0.0,
            CurrentCoverage::Limits500_1000,
        ))
    }

    #[test]
    fn composes_draft_for_fixed_recipient() {
        let handler = ComposeResultsEmailHandler::new("agent@example.com");
        let cmd = ComposeResultsEmailCommand {
            contact_fields: FormFields::new()
                .with(USER_NAME, "Sam")
                .with(USER_EMAIL, "sam@example.com"),
        };

        let composed = handler.handle(cmd, &result()).unwrap();

        assert_eq!(composed.draft.recipient, "agent@example.com");
        assert_eq!(composed.draft.subject, "MyProtection Number Results - Sam");
        assert!(composed.draft.body.contains("- Recommended Coverage: 30/60"));
        assert!(composed.draft.body.contains("- Gap Analysis: Well covered"));
        assert_eq!(composed.contact.user_email, "sam@example.com");
    }

    #[test]
    fn refuses_blank_contact_fields() {
        let handler = ComposeResultsEmailHandler::new("agent@example.com");
        let cmd = ComposeResultsEmailCommand {
            contact_fields: FormFields::new().with(USER_NAME, "Sam"),
        };

        let err = handler.handle(cmd, &result()).unwrap_err();

        assert_eq!(err, SessionError::missing_fields([USER_EMAIL]));
    }
}
