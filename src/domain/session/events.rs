//! Facts emitted by the assessment flow as the user moves through it.

use serde::{Deserialize, Serialize};

use super::view_state::{FlowAction, Section, ViewState};
use crate::domain::foundation::{ErrorCode, ResultId};

/// One observable step of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowEvent {
    /// The view moved to a new state.
    Transitioned {
        action: FlowAction,
        from: ViewState,
        to: ViewState,
        section: Section,
    },

    /// An action was refused; state is unchanged.
    ActionRefused {
        action: FlowAction,
        state: ViewState,
        code: String,
        reason: String,
    },

    /// A new result was stored, replacing `superseded` if there was one.
    ResultStored {
        result_id: ResultId,
        superseded: Option<ResultId>,
    },

    /// The stored result was discarded.
    ResultCleared { result_id: ResultId },

    /// The mail client was handed a prefilled draft.
    EmailLaunched {
        result_id: ResultId,
        recipient: String,
    },

    /// The booking page was opened.
    BookingOpened { url: String },
}

impl FlowEvent {
    /// Builds a refusal event.
    pub fn refused(action: FlowAction, state: ViewState, code: ErrorCode, reason: impl Into<String>) -> Self {
        FlowEvent::ActionRefused {
            action,
            state,
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the event type identifier.
    pub fn event_type(&self) -> &'static str {
        match self {
            FlowEvent::Transitioned { .. } => "flow.transitioned",
            FlowEvent::ActionRefused { .. } => "flow.action_refused",
            FlowEvent::ResultStored { .. } => "flow.result_stored",
            FlowEvent::ResultCleared { .. } => "flow.result_cleared",
            FlowEvent::EmailLaunched { .. } => "flow.email_launched",
            FlowEvent::BookingOpened { .. } => "flow.booking_opened",
        }
    }
}
