//! ViewState - which part of the assessment the user is looking at.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// A page section the presenter can show. Exactly one is visible at a time
/// once the user has left the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// The asset and coverage input form.
    Form,
    /// The calculated result.
    Result,
    /// The email details form.
    Email,
}

impl Section {
    /// All managed sections.
    pub const ALL: [Section; 3] = [Section::Form, Section::Result, Section::Email];

    /// Returns the page element id for this section.
    pub fn element_id(&self) -> &'static str {
        match self {
            Section::Form => "formSection",
            Section::Result => "resultSection",
            Section::Email => "emailSection",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_id())
    }
}

/// Lifecycle of one assessment session.
///
/// Valid transitions:
/// - Idle -> Collecting (start)
/// - Collecting -> Collecting (start, reset)
/// - Collecting -> Reviewed (submit calculation)
/// - Reviewed -> Composing (request send)
/// - Composing -> Reviewed (cancel email)
/// - Reviewed | Composing -> Collecting (send email, start, reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Landing view only; no managed section visible.
    #[default]
    Idle,
    /// Input form visible.
    Collecting,
    /// Result visible; a session result exists.
    Reviewed,
    /// Email form visible.
    Composing,
}

impl ViewState {
    /// Returns the single section visible in this state, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            ViewState::Idle => None,
            ViewState::Collecting => Some(Section::Form),
            ViewState::Reviewed => Some(Section::Result),
            ViewState::Composing => Some(Section::Email),
        }
    }
}

impl StateMachine for ViewState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewState::*;
        matches!(
            (self, target),
            (Idle, Collecting)
                | (Collecting, Collecting)
                | (Collecting, Reviewed)
                | (Reviewed, Collecting)
                | (Reviewed, Composing)
                | (Composing, Reviewed)
                | (Composing, Collecting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewState::*;
        match self {
            Idle => vec![Collecting],
            Collecting => vec![Collecting, Reviewed],
            Reviewed => vec![Collecting, Composing],
            Composing => vec![Reviewed, Collecting],
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewState::Idle => "Idle",
            ViewState::Collecting => "Collecting",
            ViewState::Reviewed => "Reviewed",
            ViewState::Composing => "Composing",
        };
        write!(f, "{}", s)
    }
}

/// Discrete user actions that drive the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowAction {
    Start,
    SubmitCalculation,
    RequestSend,
    SubmitEmail,
    CancelEmail,
    Reset,
    BookAppointment,
}

impl fmt::Display for FlowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowAction::Start => "start",
            FlowAction::SubmitCalculation => "submit_calculation",
            FlowAction::RequestSend => "request_send",
            FlowAction::SubmitEmail => "submit_email",
            FlowAction::CancelEmail => "cancel_email",
            FlowAction::Reset => "reset",
            FlowAction::BookAppointment => "book_appointment",
        };
        write!(f, "{}", s)
    }
}
