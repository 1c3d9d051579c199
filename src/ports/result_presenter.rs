//! ResultPresenter port - Interface for everything the user sees.
//!
//! Covers section visibility, result values, field highlighting, blocking
//! notices and form resets. Scrolling and styling are the adapter's business.

use serde::{Deserialize, Serialize};

use crate::domain::session::{ResultDisplay, Section};

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Confirmation of something that worked.
    Info,
    /// A refused action the user can fix.
    Warning,
    /// Something failed unexpectedly.
    Error,
}

/// A blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Which form to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Protection,
    Email,
}

/// Port for presenting the flow to the user.
pub trait ResultPresenter: Send + Sync {
    /// Shows `section` and hides every other managed section.
    fn show_section(&self, section: Section);

    /// Fills the result section.
    fn present_result(&self, display: &ResultDisplay);

    /// Highlights blank required fields; an empty slice clears highlighting.
    fn mark_missing_fields(&self, fields: &[String]);

    /// Shows a blocking notice.
    fn notify(&self, notice: &Notice);

    /// Clears every field of a form.
    fn reset_form(&self, form: FormKind);
}
