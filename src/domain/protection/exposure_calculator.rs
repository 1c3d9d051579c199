//! Exposure Calculator - total assets at risk.

use serde::{Deserialize, Serialize};

use super::asset_inputs::AssetInputs;
use crate::domain::foundation::Money;

/// Per-field view of an exposure total, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureBreakdown {
    pub home_value: Money,
    pub vehicle_value: Money,
    pub savings_value: Money,
    pub income_value: Money,
    pub total: Money,
}

/// Calculator for protection exposure.
pub struct ExposureCalculator;

impl ExposureCalculator {
    /// Sums home, vehicle, savings and income values.
    ///
    /// Negative amounts are summed as-is. Summation always runs in field
    /// order so totals are reproducible bit-for-bit.
    pub fn calculate(inputs: &AssetInputs) -> Money {
        inputs.exposure_components().into_iter().sum()
    }

    /// Same as [`calculate`](Self::calculate), keeping the summands.
    pub fn breakdown(inputs: &AssetInputs) -> ExposureBreakdown {
        ExposureBreakdown {
            home_value: inputs.home_value,
            vehicle_value: inputs.vehicle_value,
            savings_value: inputs.savings_value,
            income_value: inputs.income_value,
            total: Self::calculate(inputs),
        }
    }
}
