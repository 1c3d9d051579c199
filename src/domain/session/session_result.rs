//! SessionResult - the calculation handed from the result step to the email step.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ResultId, Timestamp};
use crate::domain::protection::{
    Assessment, AssetInputs, GapSeverity, GapVerdict, Recommendation,
};

/// Inputs plus everything computed from them.
///
/// Replaced wholesale by every new calculation; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    id: ResultId,
    inputs: AssetInputs,
    assessment: Assessment,
    calculated_at: Timestamp,
}

impl SessionResult {
    /// Creates a result for inputs that were just assessed.
    pub fn new(inputs: AssetInputs, assessment: Assessment) -> Self {
        Self {
            id: ResultId::new(),
            inputs,
            assessment,
            calculated_at: Timestamp::now(),
        }
    }

    /// Assesses the inputs and wraps the outcome.
    pub fn assess(inputs: AssetInputs) -> Self {
        let assessment = Assessment::of(&inputs);
        Self::new(inputs, assessment)
    }

    pub fn id(&self) -> ResultId {
        self.id
    }

    pub fn inputs(&self) -> &AssetInputs {
        &self.inputs
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn exposure(&self) -> Money {
        self.assessment.exposure
    }

    pub fn recommendation(&self) -> &Recommendation {
        &self.assessment.recommendation
    }

    pub fn gap_verdict(&self) -> GapVerdict {
        self.assessment.gap_verdict
    }

    pub fn calculated_at(&self) -> &Timestamp {
        &self.calculated_at
    }

    /// Returns the values a presenter shows for this result.
    pub fn display(&self) -> ResultDisplay {
        ResultDisplay {
            exposure: self.exposure().format_usd(),
            coverage_tier: self.recommendation().coverage_tier.label().to_string(),
            gap_verdict: self.gap_verdict().label().to_string(),
            gap_severity: self.recommendation().gap_severity,
        }
    }
}

/// Formatted values for the result section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDisplay {
    /// Exposure as whole dollars, e.g. "$450,000".
    pub exposure: String,
    /// Recommended tier label.
    pub coverage_tier: String,
    /// Gap verdict label.
    pub gap_verdict: String,
    /// Severity of the recommended tier, for styling.
    pub gap_severity: GapSeverity,
}
