//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Fields cannot be empty: {}", fields.join(", "))]
    EmptyFields { fields: Vec<String> },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an error naming every blank field at once.
    pub fn empty_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationError::EmptyFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the names of the offending fields.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::EmptyField { field } => vec![field.as_str()],
            ValidationError::EmptyFields { fields } => fields.iter().map(String::as_str).collect(),
            ValidationError::InvalidFormat { field, .. } => vec![field.as_str()],
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Sequencing errors
    InvalidStateTransition,
    NoResultAvailable,

    // Calculation errors
    CalculationFailed,

    // Collaborator errors
    LinkOpenFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::NoResultAvailable => "NO_RESULT_AVAILABLE",
            ErrorCode::CalculationFailed => "CALCULATION_FAILED",
            ErrorCode::LinkOpenFailed => "LINK_OPEN_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } | ValidationError::EmptyFields { .. } => {
                ErrorCode::EmptyField
            }
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let fields = err.fields().join(",");
        DomainError::new(code, err.to_string()).with_detail("fields", fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("homeValue");
        assert_eq!(format!("{}", err), "Field 'homeValue' cannot be empty");
    }

    #[test]
    fn validation_error_empty_fields_lists_every_field() {
        let err = ValidationError::empty_fields(["homeValue", "incomeValue"]);
        assert_eq!(
            format!("{}", err),
            "Fields cannot be empty: homeValue, incomeValue"
        );
        assert_eq!(err.fields(), vec!["homeValue", "incomeValue"]);
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("userEmail", "missing @ symbol");
        assert_eq!(
            format!("{}", err),
            "Field 'userEmail' has invalid format: missing @ symbol"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NoResultAvailable, "Nothing calculated yet");
        assert_eq!(format!("{}", err), "[NO_RESULT_AVAILABLE] Nothing calculated yet");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::validation("userEmail", "Validation failed")
            .with_detail("reason", "invalid format");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"userEmail".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"invalid format".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_fields() {
        let err: DomainError = ValidationError::empty_fields(["homeValue", "savingsValue"]).into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(
            err.details.get("fields"),
            Some(&"homeValue,savingsValue".to_string())
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::NoResultAvailable), "NO_RESULT_AVAILABLE");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
