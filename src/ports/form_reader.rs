//! FormReader port - Interface for reading submitted forms.
//!
//! The decision core never touches page elements. Whatever renders the
//! forms implements this port and hands over raw field values.

use crate::domain::protection::FormFields;

/// Port for reading the current contents of the two forms.
///
/// Implementations return every field they know about, including blank
/// ones; required-field checks happen in the core.
pub trait FormReader: Send + Sync {
    /// Reads the asset and coverage form.
    fn read_protection_form(&self) -> FormFields;

    /// Reads the email details form (`userName`, `userEmail`).
    fn read_email_form(&self) -> FormFields;
}
