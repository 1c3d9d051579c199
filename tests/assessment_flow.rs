//! Integration tests for the assessment flow.
//!
//! These tests drive `ProtectionFlow` the way a page would:
//! 1. Start, fill the calculation form, submit
//! 2. Review the result, open the email form
//! 3. Cancel or send, and check what the user sees at each step
//!
//! Uses the in-memory adapters so no browser or mail client is involved.

use std::sync::Arc;
use std::time::Duration;

use myprotection::adapters::{InMemoryForm, InMemoryObserver, InMemoryPresenter, RecordingLinkOpener};
use myprotection::application::{FlowSettings, ProtectionFlow};
use myprotection::config::AppConfig;
use myprotection::domain::protection::form_fields::{
    CURRENT_COVERAGE, HOME_VALUE, INCOME_VALUE, LIFE_INSURANCE, SAVINGS_VALUE, USER_EMAIL,
    USER_NAME, VEHICLE_VALUE,
};
use myprotection::domain::protection::{CoverageTier, FormFields, GapSeverity, GapVerdict};
use myprotection::domain::session::{Section, SessionError, ViewState};
use myprotection::ports::{FormKind, LinkTarget, NoticeKind};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Page {
    form: Arc<InMemoryForm>,
    presenter: Arc<InMemoryPresenter>,
    links: Arc<RecordingLinkOpener>,
    observer: Arc<InMemoryObserver>,
    flow: ProtectionFlow,
}

impl Page {
    fn open() -> Self {
        let form = Arc::new(InMemoryForm::new());
        let presenter = Arc::new(InMemoryPresenter::linked_to(form.clone()));
        let links = Arc::new(RecordingLinkOpener::new());
        let observer = Arc::new(InMemoryObserver::new());

        let mut config = AppConfig::default();
        config.mail.recipient = "agent@example.com".to_string();
        config.validate().expect("default config is valid");
        let settings = FlowSettings::from_config(&config)
            .expect("booking url parses")
            .with_reset_delay(Duration::ZERO);

        let flow = ProtectionFlow::new(
            form.clone(),
            presenter.clone(),
            links.clone(),
            observer.clone(),
            settings,
        );

        Self {
            form,
            presenter,
            links,
            observer,
            flow,
        }
    }

    fn calculate(&mut self, fields: FormFields) -> Result<(), SessionError> {
        self.form.fill_protection(fields);
        self.flow.submit_calculation().map(|_| ())
    }
}

fn assets(home: &str, vehicle: &str, savings: &str, income: &str, coverage: &str) -> FormFields {
    FormFields::new()
        .with(HOME_VALUE, home)
        .with(VEHICLE_VALUE, vehicle)
        .with(SAVINGS_VALUE, savings)
        .with(INCOME_VALUE, income)
        .with(LIFE_INSURANCE, "250000")
        .with(CURRENT_COVERAGE, coverage)
}

fn contact() -> FormFields {
    FormFields::new()
        .with(USER_NAME, "Jane Doe")
        .with(USER_EMAIL, "jane@example.com")
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_assessment_and_email_round() {
    let mut page = Page::open();
    assert_eq!(page.flow.state(), ViewState::Idle);
    assert_eq!(page.presenter.visible_section(), None);

    page.flow.start().unwrap();
    page.calculate(assets("300000", "20000", "50000", "80000", "100/300"))
        .unwrap();

    let result = page.flow.session_result().unwrap();
    assert_eq!(result.exposure().value(), 450000.0);
    assert_eq!(result.recommendation().coverage_tier, CoverageTier::Limits500_500);
    assert_eq!(result.recommendation().gap_severity, GapSeverity::Adequate);
    assert_eq!(result.gap_verdict(), GapVerdict::Insufficient);

    page.flow.request_send().unwrap();
    assert_eq!(page.presenter.visible_section(), Some(Section::Email));

    page.form.fill_email(contact());
    page.flow.submit_email().await.unwrap();

    let (url, target) = page.links.last_opened().unwrap();
    assert_eq!(target, LinkTarget::SameWindow);
    assert_eq!(url.path(), "agent@example.com");
    let query = url.query().unwrap();
    assert!(query.starts_with("subject=MyProtection%20Number%20Results%20-%20Jane%20Doe&body="));
    assert!(query.contains("Total%20Protection%20Exposure%3A%20%24450%2C000"));

    assert_eq!(page.flow.state(), ViewState::Collecting);
    assert_eq!(page.presenter.visible_section(), Some(Section::Form));
    assert_eq!(
        page.presenter.resets(),
        vec![FormKind::Protection, FormKind::Email]
    );
    assert_eq!(page.presenter.last_notice().unwrap().kind, NoticeKind::Info);

    assert_eq!(
        page.presenter.section_history(),
        vec![Section::Form, Section::Result, Section::Email, Section::Form]
    );
}

#[test]
fn recalculation_supersedes_previous_result() {
    let mut page = Page::open();
    page.flow.start().unwrap();
    page.calculate(assets("10000", "0", "0", "0", "Not sure")).unwrap();
    let first = page.flow.session_result().unwrap().id();

    page.flow.start().unwrap();
    page.calculate(assets("600000", "0", "0", "0", "500/1000")).unwrap();

    let second = page.flow.session_result().unwrap();
    assert_ne!(second.id(), first);
    assert_eq!(second.recommendation().coverage_tier, CoverageTier::Umbrella);
    assert_eq!(second.gap_verdict(), GapVerdict::Insufficient);
    assert_eq!(
        page.presenter.last_display().unwrap().coverage_tier,
        "500/500 + $1M Umbrella"
    );
}

#[test]
fn composing_requires_a_result() {
    let mut page = Page::open();
    page.flow.start().unwrap();
    let shown_before = page.presenter.section_history().len();

    let err = page.flow.request_send().unwrap_err();

    assert_eq!(err, SessionError::NoResultAvailable);
    assert_eq!(page.flow.state(), ViewState::Collecting);
    assert_eq!(page.presenter.section_history().len(), shown_before);
    assert_eq!(page.presenter.last_notice().unwrap().kind, NoticeKind::Warning);
}

#[test]
fn cancel_email_keeps_result() {
    let mut page = Page::open();
    page.flow.start().unwrap();
    page.calculate(assets("300000", "20000", "50000", "80000", "100/300"))
        .unwrap();
    let id = page.flow.session_result().unwrap().id();
    page.flow.request_send().unwrap();

    page.flow.cancel_email().unwrap();

    assert_eq!(page.flow.state(), ViewState::Reviewed);
    assert_eq!(page.flow.session_result().unwrap().id(), id);

    // The email form can be reopened straight away.
    page.flow.request_send().unwrap();
    assert_eq!(page.flow.state(), ViewState::Composing);
}

#[test]
fn blank_fields_are_named_in_the_refusal() {
    let mut page = Page::open();
    page.flow.start().unwrap();

    let err = page
        .calculate(assets("", "20000", "", "80000", "100/300"))
        .unwrap_err();

    assert_eq!(
        err,
        SessionError::missing_fields([HOME_VALUE, SAVINGS_VALUE])
    );
    assert_eq!(page.flow.state(), ViewState::Collecting);
    assert!(page
        .observer
        .has_protection_event("protection.inputs_rejected"));
    assert!(!page
        .observer
        .has_protection_event("protection.exposure_calculated"));
}

#[test]
fn every_accepted_action_shows_one_section() {
    let mut page = Page::open();

    page.flow.start().unwrap();
    page.calculate(assets("1", "2", "3", "4", "25/50")).unwrap();
    page.flow.request_send().unwrap();
    page.flow.cancel_email().unwrap();
    page.flow.reset().unwrap();

    let transitions = page
        .observer
        .flow_event_types()
        .into_iter()
        .filter(|t| *t == "flow.transitioned")
        .count();
    assert_eq!(transitions, page.presenter.section_history().len());
    assert_eq!(transitions, 5);
    assert!(page.flow.session_result().is_none());
}
