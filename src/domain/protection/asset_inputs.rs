//! AssetInputs - one submission of the calculation form.

use serde::{Deserialize, Serialize};

use super::current_coverage::CurrentCoverage;
use super::form_fields::{
    FormFields, CURRENT_COVERAGE, HOME_VALUE, INCOME_VALUE, LIFE_INSURANCE,
    REQUIRED_CALCULATION_FIELDS, SAVINGS_VALUE, VEHICLE_VALUE,
};
use crate::domain::foundation::{Money, ValidationError};

/// Declared assets and coverage from the calculation form.
///
/// Created fresh on each submission and never mutated afterwards.
/// `life_insurance` is informational only and never enters the exposure sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInputs {
    pub home_value: Money,
    pub vehicle_value: Money,
    pub savings_value: Money,
    pub income_value: Money,
    pub life_insurance: Money,
    pub current_coverage: CurrentCoverage,
}

impl AssetInputs {
    /// Creates inputs from already-parsed amounts.
    pub fn new(
        home_value: f64,
        vehicle_value: f64,
        savings_value: f64,
        income_value: f64,
        current_coverage: CurrentCoverage,
    ) -> Self {
        Self {
            home_value: Money::new(home_value),
            vehicle_value: Money::new(vehicle_value),
            savings_value: Money::new(savings_value),
            income_value: Money::new(income_value),
            life_insurance: Money::ZERO,
            current_coverage,
        }
    }

    /// Sets the informational life insurance amount.
    pub fn with_life_insurance(mut self, amount: f64) -> Self {
        self.life_insurance = Money::new(amount);
        self
    }

    /// Builds inputs from a raw form submission.
    ///
    /// Blank required fields are refused, naming every one of them.
    /// Non-blank amounts that fail to parse are taken as zero.
    ///
    /// # Errors
    ///
    /// - `EmptyFields` listing the blank required fields
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        let missing = fields.missing(REQUIRED_CALCULATION_FIELDS);
        if !missing.is_empty() {
            return Err(ValidationError::empty_fields(missing));
        }
        Ok(Self::parse_lenient(fields))
    }

    /// Builds inputs without checking required fields.
    pub fn parse_lenient(fields: &FormFields) -> Self {
        Self {
            home_value: Money::parse(fields.get_or_empty(HOME_VALUE)),
            vehicle_value: Money::parse(fields.get_or_empty(VEHICLE_VALUE)),
            savings_value: Money::parse(fields.get_or_empty(SAVINGS_VALUE)),
            income_value: Money::parse(fields.get_or_empty(INCOME_VALUE)),
            life_insurance: Money::parse(fields.get_or_empty(LIFE_INSURANCE)),
            current_coverage: CurrentCoverage::from_label(fields.get_or_empty(CURRENT_COVERAGE)),
        }
    }

    /// The four amounts that make up exposure, in summation order.
    pub fn exposure_components(&self) -> [Money; 4] {
        [
            self.home_value,
            self.vehicle_value,
            self.savings_value,
            self.income_value,
        ]
    }
}
