//! Session-specific error types.

use thiserror::Error;

use super::view_state::ViewState;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Refusals and failures surfaced to the user by the assessment flow.
///
/// None of these is fatal; the user can always go back to the input step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Required inputs were blank.
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },

    /// Action needs a calculated result and there is none.
    #[error("No calculated result is available")]
    NoResultAvailable,

    /// Action is not allowed from the current view.
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: ViewState, to: ViewState },

    /// The calculation hit an unexpected condition.
    #[error("Calculation failed: {0}")]
    CalculationFailed(String),

    /// An external link could not be opened.
    #[error("Failed to open link: {0}")]
    LinkOpenFailed(String),
}

impl SessionError {
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SessionError::MissingRequiredFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_transition(from: ViewState, to: ViewState) -> Self {
        SessionError::InvalidTransition { from, to }
    }

    pub fn calculation_failed(reason: impl Into<String>) -> Self {
        SessionError::CalculationFailed(reason.into())
    }

    pub fn link_open_failed(reason: impl Into<String>) -> Self {
        SessionError::LinkOpenFailed(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::MissingRequiredFields { .. } => ErrorCode::EmptyField,
            SessionError::NoResultAvailable => ErrorCode::NoResultAvailable,
            SessionError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            SessionError::CalculationFailed(_) => ErrorCode::CalculationFailed,
            SessionError::LinkOpenFailed(_) => ErrorCode::LinkOpenFailed,
        }
    }

    /// Returns the notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::MissingRequiredFields { fields } => {
                format!("Please fill in all required fields:\n{}", fields.join(", "))
            }
            SessionError::NoResultAvailable => {
                "Please calculate your MyProtection Number first.".to_string()
            }
            SessionError::InvalidTransition { .. } => {
                "That step isn't available right now.".to_string()
            }
            SessionError::CalculationFailed(_) => {
                "There was an error calculating your results. Please try again.".to_string()
            }
            SessionError::LinkOpenFailed(_) => {
                "We couldn't open that link. Please try again.".to_string()
            }
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => SessionError::MissingRequiredFields {
                fields: vec![field],
            },
            ValidationError::EmptyFields { fields } => {
                SessionError::MissingRequiredFields { fields }
            }
            other => SessionError::CalculationFailed(other.to_string()),
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.to_string());
        match err {
            SessionError::MissingRequiredFields { fields } => {
                error.with_detail("fields", fields.join(","))
            }
            SessionError::InvalidTransition { from, to } => error
                .with_detail("from", from.to_string())
                .with_detail("to", to.to_string()),
            _ => error,
        }
    }
}
