//! ProtectionFlow - sequences the calculator and the email step.
//!
//! The flow owns the `AssessmentSession` and drives the ports around it.
//! Every accepted action shows exactly one section; every refused action
//! shows a notice, reports an `ActionRefused` event and changes nothing.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::handlers::{
    CalculateProtectionCommand, CalculateProtectionHandler, CalculationError,
    ComposeResultsEmailCommand, ComposeResultsEmailHandler,
};
use crate::config::{self, AppConfig};
use crate::domain::session::{
    AssessmentSession, FlowAction, FlowEvent, SessionError, SessionResult, Transition, ViewState,
};
use crate::ports::{
    FormKind, FormReader, LinkOpener, LinkTarget, Notice, ResultPresenter, SessionObserver,
};

/// Fixed destinations and timing for a flow.
#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub recipient: String,
    pub booking_url: Url,
    pub reset_delay: Duration,
}

impl FlowSettings {
    /// Takes settings from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration section is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, config::ValidationError> {
        config.validate()?;
        Ok(Self {
            recipient: config.mail.address().to_string(),
            booking_url: config.booking_url()?,
            reset_delay: config.flow.reset_delay(),
        })
    }

    /// Same settings with a different reset delay.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

/// The assessment flow for one user.
pub struct ProtectionFlow {
    forms: Arc<dyn FormReader>,
    presenter: Arc<dyn ResultPresenter>,
    links: Arc<dyn LinkOpener>,
    observer: Arc<dyn SessionObserver>,
    calculator: CalculateProtectionHandler,
    composer: ComposeResultsEmailHandler,
    booking_url: Url,
    reset_delay: Duration,
    session: AssessmentSession,
}

impl ProtectionFlow {
    pub fn new(
        forms: Arc<dyn FormReader>,
        presenter: Arc<dyn ResultPresenter>,
        links: Arc<dyn LinkOpener>,
        observer: Arc<dyn SessionObserver>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            forms,
            presenter,
            links,
            calculator: CalculateProtectionHandler::new(observer.clone()),
            composer: ComposeResultsEmailHandler::new(settings.recipient),
            observer,
            booking_url: settings.booking_url,
            reset_delay: settings.reset_delay,
            session: AssessmentSession::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> ViewState {
        self.session.state()
    }

    pub fn session_result(&self) -> Option<&SessionResult> {
        self.session.result()
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn recipient(&self) -> &str {
        self.composer.recipient()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // User actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Shows the input form.
    pub fn start(&mut self) -> Result<Transition, SessionError> {
        let transition = self
            .session
            .start()
            .map_err(|err| self.refuse(FlowAction::Start, err))?;
        self.show(transition);
        Ok(transition)
    }

    /// Reads the calculation form, computes a result and shows it.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the input form is showing
    /// - `MissingRequiredFields` naming every blank required field
    /// - `CalculationFailed` if the pipeline could not produce a result
    pub fn submit_calculation(&mut self) -> Result<Transition, SessionError> {
        let action = FlowAction::SubmitCalculation;
        if self.state() != ViewState::Collecting {
            let err = SessionError::invalid_transition(self.state(), ViewState::Reviewed);
            return Err(self.refuse(action, err));
        }

        let fields = self.forms.read_protection_form();
        let result = match self.calculator.handle(CalculateProtectionCommand { fields }) {
            Ok(calculated) => calculated.result,
            Err(err) => {
                if let CalculationError::MissingRequiredFields { fields } = &err {
                    self.presenter.mark_missing_fields(fields);
                }
                return Err(self.refuse(action, err.into()));
            }
        };
        self.presenter.mark_missing_fields(&[]);

        let result_id = result.id();
        let display = result.display();
        let (transition, superseded) = self
            .session
            .record_result(result)
            .map_err(|err| self.refuse(action, err))?;
        self.observer.on_flow_event(&FlowEvent::ResultStored {
            result_id,
            superseded,
        });

        self.presenter.present_result(&display);
        self.show(transition);
        Ok(transition)
    }

    /// Shows the email form.
    ///
    /// # Errors
    ///
    /// - `NoResultAvailable` if nothing has been calculated
    /// - `InvalidTransition` unless the result is showing
    pub fn request_send(&mut self) -> Result<Transition, SessionError> {
        let transition = self
            .session
            .begin_compose()
            .map_err(|err| self.refuse(FlowAction::RequestSend, err))?;
        self.show(transition);
        Ok(transition)
    }

    /// Hands the results email to the mail client, then returns to the input form.
    ///
    /// After the link opens, waits the configured delay, confirms with a
    /// notice and resets both forms. The stored result is kept.
    ///
    /// # Errors
    ///
    /// - `NoResultAvailable` if nothing has been calculated
    /// - `InvalidTransition` unless the email form is showing
    /// - `MissingRequiredFields` if name or address is blank
    /// - `LinkOpenFailed` if the mail link could not be built or opened
    pub async fn submit_email(&mut self) -> Result<Transition, SessionError> {
        let action = FlowAction::SubmitEmail;
        let result = match self.session.require_result() {
            Ok(result) => result.clone(),
            Err(err) => return Err(self.refuse(action, err)),
        };
        if self.state() != ViewState::Composing {
            let err = SessionError::invalid_transition(self.state(), ViewState::Collecting);
            return Err(self.refuse(action, err));
        }

        let cmd = ComposeResultsEmailCommand {
            contact_fields: self.forms.read_email_form(),
        };
        let draft = match self.composer.handle(cmd, &result) {
            Ok(composed) => composed.draft,
            Err(err) => {
                if let SessionError::MissingRequiredFields { fields } = &err {
                    self.presenter.mark_missing_fields(fields);
                }
                return Err(self.refuse(action, err));
            }
        };
        self.presenter.mark_missing_fields(&[]);

        let opened = draft
            .mailto_url()
            .map_err(|e| SessionError::link_open_failed(e.to_string()))
            .and_then(|url| {
                self.links
                    .open(&url, LinkTarget::SameWindow)
                    .map_err(|e| SessionError::link_open_failed(e.to_string()))
            });
        if let Err(err) = opened {
            return Err(self.refuse(action, err));
        }
        self.observer.on_flow_event(&FlowEvent::EmailLaunched {
            result_id: result.id(),
            recipient: draft.recipient.clone(),
        });

        tokio::time::sleep(self.reset_delay).await;

        self.presenter.notify(&Notice::info(format!(
            "Your email client should now open with your results pre-filled. \
             If it doesn't open automatically, please email them to {}",
            draft.recipient
        )));
        self.presenter.reset_form(FormKind::Protection);
        self.presenter.reset_form(FormKind::Email);

        let transition = self
            .session
            .finish_send()
            .map_err(|err| self.refuse(action, err))?;
        self.show(transition);
        Ok(transition)
    }

    /// Closes the email form and shows the result again.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the email form is showing
    pub fn cancel_email(&mut self) -> Result<Transition, SessionError> {
        let transition = self
            .session
            .cancel_compose()
            .map_err(|err| self.refuse(FlowAction::CancelEmail, err))?;
        self.presenter.reset_form(FormKind::Email);
        self.presenter.mark_missing_fields(&[]);
        self.show(transition);
        Ok(transition)
    }

    /// Clears the input form and the stored result.
    pub fn reset(&mut self) -> Result<Transition, SessionError> {
        let (transition, cleared) = self
            .session
            .reset()
            .map_err(|err| self.refuse(FlowAction::Reset, err))?;
        if let Some(result_id) = cleared {
            self.observer
                .on_flow_event(&FlowEvent::ResultCleared { result_id });
        }
        self.presenter.reset_form(FormKind::Protection);
        self.presenter.mark_missing_fields(&[]);
        self.show(transition);
        Ok(transition)
    }

    /// Opens the booking page alongside the current view. Allowed in any state.
    ///
    /// # Errors
    ///
    /// - `LinkOpenFailed` if the page could not be opened
    pub fn book_appointment(&self) -> Result<(), SessionError> {
        self.links
            .open(&self.booking_url, LinkTarget::NewWindow)
            .map_err(|e| {
                self.refuse(
                    FlowAction::BookAppointment,
                    SessionError::link_open_failed(e.to_string()),
                )
            })?;
        self.observer.on_flow_event(&FlowEvent::BookingOpened {
            url: self.booking_url.to_string(),
        });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────────

    fn show(&self, transition: Transition) {
        self.presenter.show_section(transition.section);
        self.observer.on_flow_event(&FlowEvent::Transitioned {
            action: transition.action,
            from: transition.from,
            to: transition.to,
            section: transition.section,
        });
    }

    fn refuse(&self, action: FlowAction, err: SessionError) -> SessionError {
        let notice = match &err {
            SessionError::CalculationFailed(_) | SessionError::LinkOpenFailed(_) => {
                Notice::error(err.user_message())
            }
            _ => Notice::warning(err.user_message()),
        };
        self.presenter.notify(&notice);
        self.observer.on_flow_event(&FlowEvent::refused(
            action,
            self.state(),
            err.code(),
            err.to_string(),
        ));
        err
    }
}
