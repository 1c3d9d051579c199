//! In-memory forms for tests and headless use.

use std::sync::{PoisonError, RwLock};

use crate::domain::protection::FormFields;
use crate::ports::{FormKind, FormReader};

/// Two forms whose contents are set directly.
///
/// Pair with [`InMemoryPresenter`](super::InMemoryPresenter) to observe resets;
/// this adapter only stores what was typed.
#[derive(Debug, Default)]
pub struct InMemoryForm {
    protection: RwLock<FormFields>,
    email: RwLock<FormFields>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the calculation form's contents.
    pub fn fill_protection(&self, fields: FormFields) {
        *self.protection.write().unwrap_or_else(PoisonError::into_inner) = fields;
    }

    /// Replaces the email form's contents.
    pub fn fill_email(&self, fields: FormFields) {
        *self.email.write().unwrap_or_else(PoisonError::into_inner) = fields;
    }

    /// Empties a form.
    pub fn clear(&self, form: FormKind) {
        let lock = match form {
            FormKind::Protection => &self.protection,
            FormKind::Email => &self.email,
        };
        *lock.write().unwrap_or_else(PoisonError::into_inner) = FormFields::new();
    }
}

impl FormReader for InMemoryForm {
    fn read_protection_form(&self) -> FormFields {
        self.protection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn read_email_form(&self) -> FormFields {
        self.email
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
