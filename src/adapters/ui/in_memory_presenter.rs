//! In-memory presenter that records what the user would see.

use std::sync::{Arc, PoisonError, RwLock};

use super::in_memory_form::InMemoryForm;
use crate::domain::session::{ResultDisplay, Section};
use crate::ports::{FormKind, Notice, ResultPresenter};

#[derive(Debug, Default)]
struct Screen {
    visible: Option<Section>,
    section_history: Vec<Section>,
    displays: Vec<ResultDisplay>,
    missing_fields: Vec<String>,
    notices: Vec<Notice>,
    resets: Vec<FormKind>,
}

/// Presenter keeping the visible section and a log of everything shown.
///
/// When linked to an [`InMemoryForm`], form resets clear that form too.
#[derive(Debug, Default)]
pub struct InMemoryPresenter {
    screen: RwLock<Screen>,
    form: Option<Arc<InMemoryForm>>,
}

impl InMemoryPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a presenter whose resets clear `form`.
    pub fn linked_to(form: Arc<InMemoryForm>) -> Self {
        Self {
            screen: RwLock::default(),
            form: Some(form),
        }
    }

    fn with_screen<T>(&self, f: impl FnOnce(&Screen) -> T) -> T {
        f(&self.screen.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn update_screen(&self, f: impl FnOnce(&mut Screen)) {
        f(&mut self.screen.write().unwrap_or_else(PoisonError::into_inner));
    }

    // === Test Helpers ===

    /// The one section currently shown, if any.
    pub fn visible_section(&self) -> Option<Section> {
        self.with_screen(|s| s.visible)
    }

    /// Every section shown, in order.
    pub fn section_history(&self) -> Vec<Section> {
        self.with_screen(|s| s.section_history.clone())
    }

    /// The most recently presented result.
    pub fn last_display(&self) -> Option<ResultDisplay> {
        self.with_screen(|s| s.displays.last().cloned())
    }

    /// Number of results presented.
    pub fn display_count(&self) -> usize {
        self.with_screen(|s| s.displays.len())
    }

    /// Fields currently highlighted as missing.
    pub fn missing_fields(&self) -> Vec<String> {
        self.with_screen(|s| s.missing_fields.clone())
    }

    /// Every notice shown, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.with_screen(|s| s.notices.clone())
    }

    /// The most recent notice.
    pub fn last_notice(&self) -> Option<Notice> {
        self.with_screen(|s| s.notices.last().cloned())
    }

    /// Every form reset, in order.
    pub fn resets(&self) -> Vec<FormKind> {
        self.with_screen(|s| s.resets.clone())
    }
}

impl ResultPresenter for InMemoryPresenter {
    fn show_section(&self, section: Section) {
        self.update_screen(|s| {
            s.visible = Some(section);
            s.section_history.push(section);
        });
    }

    fn present_result(&self, display: &ResultDisplay) {
        self.update_screen(|s| s.displays.push(display.clone()));
    }

    fn mark_missing_fields(&self, fields: &[String]) {
        self.update_screen(|s| s.missing_fields = fields.to_vec());
    }

    fn notify(&self, notice: &Notice) {
        self.update_screen(|s| s.notices.push(notice.clone()));
    }

    fn reset_form(&self, form: FormKind) {
        self.update_screen(|s| s.resets.push(form));
        if let Some(linked) = &self.form {
            linked.clear(form);
        }
    }
}
