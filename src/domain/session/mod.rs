//! Session module - the assessment flow's lifecycle and hand-off state.
//!
//! # Module Structure
//!
//! - `view_state` - ViewState state machine, page sections, user actions
//! - `session_result` - Result carried from calculation to email
//! - `aggregate` - AssessmentSession owning state and result
//! - `email_draft` - Contact details and the prefilled results email
//! - `events` - Flow events for observers
//! - `errors` - User-facing refusals

mod aggregate;
mod email_draft;
mod errors;
mod events;
mod session_result;
mod view_state;

pub use aggregate::{AssessmentSession, Transition};
pub use email_draft::{ContactDetails, EmailDraft};
pub use errors::SessionError;
pub use events::FlowEvent;
pub use session_result::{ResultDisplay, SessionResult};
pub use view_state::{FlowAction, Section, ViewState};
