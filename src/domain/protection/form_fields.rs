//! Raw form submissions as field-name to string mappings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name for the home value input.
pub const HOME_VALUE: &str = "homeValue";
/// Field name for the vehicle value input.
pub const VEHICLE_VALUE: &str = "vehicleValue";
/// Field name for the savings and investments input.
pub const SAVINGS_VALUE: &str = "savingsValue";
/// Field name for the annual household income input.
pub const INCOME_VALUE: &str = "incomeValue";
/// Field name for the life insurance input.
pub const LIFE_INSURANCE: &str = "lifeInsurance";
/// Field name for the current auto coverage selector.
pub const CURRENT_COVERAGE: &str = "currentCoverage";
/// Field name for the user's name on the email form.
pub const USER_NAME: &str = "userName";
/// Field name for the user's address on the email form.
pub const USER_EMAIL: &str = "userEmail";

/// Fields the calculation form refuses to submit without.
pub const REQUIRED_CALCULATION_FIELDS: &[&str] = &[
    HOME_VALUE,
    VEHICLE_VALUE,
    SAVINGS_VALUE,
    INCOME_VALUE,
    CURRENT_COVERAGE,
];

/// Fields the email form refuses to submit without.
pub const REQUIRED_EMAIL_FIELDS: &[&str] = &[USER_NAME, USER_EMAIL];

/// One submitted form: field name to raw string value.
///
/// Keys are kept sorted so diagnostics and serialized output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field, returning self for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the raw value of a field, if submitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value of a field, or an empty string when absent.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// A field is blank when absent or whitespace-only.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).map_or(true, |v| v.trim().is_empty())
    }

    /// Returns the required fields that are blank, in the order given.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| self.is_blank(name))
            .collect()
    }

    /// Returns the number of submitted fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_means_absent_or_whitespace() {
        let fields = FormFields::new()
            .with(HOME_VALUE, "250000")
            .with(VEHICLE_VALUE, "   ")
            .with(SAVINGS_VALUE, "");

        assert!(!fields.is_blank(HOME_VALUE));
        assert!(fields.is_blank(VEHICLE_VALUE));
        assert!(fields.is_blank(SAVINGS_VALUE));
        assert!(fields.is_blank(INCOME_VALUE));
    }

    #[test]
    fn missing_preserves_required_order() {
        let fields = FormFields::new()
            .with(VEHICLE_VALUE, "20000")
            .with(CURRENT_COVERAGE, "100/300");

        assert_eq!(
            fields.missing(REQUIRED_CALCULATION_FIELDS),
            vec![HOME_VALUE, SAVINGS_VALUE, INCOME_VALUE]
        );
    }

    #[test]
    fn life_insurance_is_not_required() {
        assert!(!REQUIRED_CALCULATION_FIELDS.contains(&LIFE_INSURANCE));
    }

    #[test]
    fn collects_from_pairs() {
        let fields: FormFields = [(USER_NAME, "Ada"), (USER_EMAIL, "ada@example.com")]
            .into_iter()
            .collect();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(USER_NAME), Some("Ada"));
        assert!(fields.missing(REQUIRED_EMAIL_FIELDS).is_empty());
    }

    #[test]
    fn get_or_empty_defaults_absent_fields() {
        let fields = FormFields::new();
        assert_eq!(fields.get_or_empty(LIFE_INSURANCE), "");
        assert!(fields.is_empty());
    }
}
