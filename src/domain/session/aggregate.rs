//! AssessmentSession aggregate.
//!
//! Owns the current view and the single result carried from the calculation
//! step to the email step. The session is the only writer of both; callers
//! read the result through `result()`.
//!
//! # Lifecycle of the result
//!
//! - Created by a successful calculation
//! - Replaced wholesale by the next successful calculation
//! - Cleared only by an explicit reset

use serde::{Deserialize, Serialize};

use super::errors::SessionError;
use super::session_result::SessionResult;
use super::view_state::{FlowAction, Section, ViewState};
use crate::domain::foundation::{ResultId, StateMachine};

/// A completed state change and the one section it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub action: FlowAction,
    pub from: ViewState,
    pub to: ViewState,
    pub section: Section,
}

/// Assessment session aggregate.
///
/// # Invariants
///
/// - `Reviewed` and `Composing` are only entered while a result exists
/// - Refused operations leave both the state and the result untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    state: ViewState,
    result: Option<SessionResult>,
}

impl AssessmentSession {
    /// Creates a session on the landing view with no result.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current view state.
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Returns the stored result, if any.
    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    /// Returns true if a result has been calculated and not cleared.
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the stored result or refuses.
    ///
    /// # Errors
    ///
    /// - `NoResultAvailable` if nothing has been calculated
    pub fn require_result(&self) -> Result<&SessionResult, SessionError> {
        self.result.as_ref().ok_or(SessionError::NoResultAvailable)
    }

    /// Checks whether the current state may move to `target`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the state machine forbids it
    pub fn check_transition(&self, target: ViewState) -> Result<(), SessionError> {
        self.state
            .transition_to(target)
            .map(|_| ())
            .map_err(|_| SessionError::invalid_transition(self.state, target))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Shows the input form.
    pub fn start(&mut self) -> Result<Transition, SessionError> {
        self.move_to(FlowAction::Start, ViewState::Collecting)
    }

    /// Stores a fresh result and shows it.
    ///
    /// Returns the id of the result this one replaced, if any.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the input form is showing
    pub fn record_result(
        &mut self,
        result: SessionResult,
    ) -> Result<(Transition, Option<ResultId>), SessionError> {
        self.require_state(ViewState::Collecting, ViewState::Reviewed)?;
        let transition = self.move_to(FlowAction::SubmitCalculation, ViewState::Reviewed)?;
        let superseded = self.result.replace(result).map(|old| old.id());
        Ok((transition, superseded))
    }

    /// Opens the email form.
    ///
    /// # Errors
    ///
    /// - `NoResultAvailable` if nothing has been calculated
    /// - `InvalidTransition` unless the result is showing
    pub fn begin_compose(&mut self) -> Result<Transition, SessionError> {
        self.require_result()?;
        self.move_to(FlowAction::RequestSend, ViewState::Composing)
    }

    /// Closes the email form and shows the result again.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the email form is showing
    pub fn cancel_compose(&mut self) -> Result<Transition, SessionError> {
        self.require_state(ViewState::Composing, ViewState::Reviewed)?;
        self.move_to(FlowAction::CancelEmail, ViewState::Reviewed)
    }

    /// Returns to the input form after the email was handed off.
    ///
    /// The result is kept until the next calculation or reset.
    ///
    /// # Errors
    ///
    /// - `NoResultAvailable` if nothing has been calculated
    /// - `InvalidTransition` unless the email form is showing
    pub fn finish_send(&mut self) -> Result<Transition, SessionError> {
        self.require_result()?;
        self.require_state(ViewState::Composing, ViewState::Collecting)?;
        self.move_to(FlowAction::SubmitEmail, ViewState::Collecting)
    }

    /// Discards the result and shows an empty input form.
    ///
    /// Returns the id of the discarded result, if any.
    pub fn reset(&mut self) -> Result<(Transition, Option<ResultId>), SessionError> {
        let transition = self.move_to(FlowAction::Reset, ViewState::Collecting)?;
        let cleared = self.result.take().map(|old| old.id());
        Ok((transition, cleared))
    }

    /// Some actions share a target with others and are only valid from one view.
    fn require_state(&self, expected: ViewState, target: ViewState) -> Result<(), SessionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SessionError::invalid_transition(self.state, target))
        }
    }

    fn move_to(&mut self, action: FlowAction, target: ViewState) -> Result<Transition, SessionError> {
        self.check_transition(target)?;
        let section = target
            .section()
            .ok_or_else(|| SessionError::invalid_transition(self.state, target))?;

        let transition = Transition {
            action,
            from: self.state,
            to: target,
            section,
        };
        self.state = target;
        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protection::{AssetInputs, CurrentCoverage};

    fn test_result() -> SessionResult {
        SessionResult::assess(AssetInputs::new(
            300000.0,
            20000.0,
            50000.0,
            80000.0,
            CurrentCoverage::Limits100_300,
        ))
    }

    fn reviewed_session() -> AssessmentSession {
        let mut session = AssessmentSession::new();
        session.start().unwrap();
        session.record_result(test_result()).unwrap();
        session
    }

    #[test]
    fn new_session_is_idle_without_result() {
        let session = AssessmentSession::new();
        assert_eq!(session.state(), ViewState::Idle);
        assert!(!session.has_result());
    }

    #[test]
    fn start_shows_form() {
        let mut session = AssessmentSession::new();
        let transition = session.start().unwrap();

        assert_eq!(transition.from, ViewState::Idle);
        assert_eq!(transition.to, ViewState::Collecting);
        assert_eq!(transition.section, Section::Form);
        assert_eq!(session.state(), ViewState::Collecting);
    }

    #[test]
    fn record_result_shows_result() {
        let session = reviewed_session();
        assert_eq!(session.state(), ViewState::Reviewed);
        assert!(session.has_result());
    }

    #[test]
    fn record_result_from_idle_is_refused_without_storing() {
        let mut session = AssessmentSession::new();
        let result = session.record_result(test_result());

        assert_eq!(
            result.unwrap_err(),
            SessionError::invalid_transition(ViewState::Idle, ViewState::Reviewed)
        );
        assert!(!session.has_result());
        assert_eq!(session.state(), ViewState::Idle);
    }

    #[test]
    fn new_result_supersedes_old_one() {
        let mut session = reviewed_session();
        let first_id = session.result().unwrap().id();

        session.start().unwrap();
        let (_, superseded) = session.record_result(test_result()).unwrap();

        assert_eq!(superseded, Some(first_id));
        assert_ne!(session.result().unwrap().id(), first_id);
    }

    #[test]
    fn begin_compose_without_result_is_refused() {
        let mut session = AssessmentSession::new();
        session.start().unwrap();

        assert_eq!(session.begin_compose(), Err(SessionError::NoResultAvailable));
        assert_eq!(session.state(), ViewState::Collecting);
    }

    #[test]
    fn begin_compose_from_idle_is_refused() {
        let mut session = AssessmentSession::new();
        assert_eq!(session.begin_compose(), Err(SessionError::NoResultAvailable));
        assert_eq!(session.state(), ViewState::Idle);
    }

    #[test]
    fn cancel_compose_returns_to_reviewed_with_result_intact() {
        let mut session = reviewed_session();
        let id = session.result().unwrap().id();
        session.begin_compose().unwrap();

        let transition = session.cancel_compose().unwrap();

        assert_eq!(transition.to, ViewState::Reviewed);
        assert_eq!(transition.section, Section::Result);
        assert_eq!(session.result().unwrap().id(), id);
    }

    #[test]
    fn cancel_compose_outside_composing_is_refused() {
        let mut session = reviewed_session();
        assert_eq!(
            session.cancel_compose(),
            Err(SessionError::invalid_transition(ViewState::Reviewed, ViewState::Reviewed))
        );
        assert_eq!(session.state(), ViewState::Reviewed);
        assert!(session.has_result());
    }

    #[test]
    fn finish_send_returns_to_form_and_keeps_result() {
        let mut session = reviewed_session();
        session.begin_compose().unwrap();

        let transition = session.finish_send().unwrap();

        assert_eq!(transition.to, ViewState::Collecting);
        assert!(session.has_result());
    }

    #[test]
    fn finish_send_requires_email_form() {
        let mut session = reviewed_session();
        assert!(matches!(
            session.finish_send(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert_eq!(session.state(), ViewState::Reviewed);
    }

    #[test]
    fn reset_clears_result() {
        let mut session = reviewed_session();
        let id = session.result().unwrap().id();

        let (transition, cleared) = session.reset().unwrap();

        assert_eq!(transition.to, ViewState::Collecting);
        assert_eq!(cleared, Some(id));
        assert!(!session.has_result());
    }

    #[test]
    fn reset_from_idle_shows_form() {
        let mut session = AssessmentSession::new();
        let (transition, cleared) = session.reset().unwrap();

        assert_eq!(transition.to, ViewState::Collecting);
        assert_eq!(cleared, None);
    }
}
