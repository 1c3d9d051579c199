//! Facts emitted while an assessment is computed.
//!
//! The pipeline never logs; it reports these to a `SessionObserver`, which
//! decides how much of it anyone sees.

use serde::{Deserialize, Serialize};

use super::exposure_calculator::ExposureBreakdown;
use super::gap_analyzer::GapVerdict;
use super::recommendation_engine::Recommendation;
use crate::domain::foundation::Money;

/// One observable step of the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProtectionEvent {
    /// Form submitted and parsed into amounts.
    InputsParsed { field_count: usize },

    /// Required fields were blank; nothing was calculated.
    InputsRejected { missing_fields: Vec<String> },

    /// Exposure summed.
    ExposureCalculated { breakdown: ExposureBreakdown },

    /// Tier chosen for the exposure.
    RecommendationMade {
        exposure: Money,
        recommendation: Recommendation,
    },

    /// Current coverage compared with the recommendation.
    GapAnalyzed {
        current_coverage: String,
        recommended_tier: String,
        verdict: GapVerdict,
    },

    /// Pipeline aborted on an unexpected condition.
    CalculationFailed { reason: String },
}

impl ProtectionEvent {
    /// Returns the event type identifier.
    pub fn event_type(&self) -> &'static str {
        match self {
            ProtectionEvent::InputsParsed { .. } => "protection.inputs_parsed",
            ProtectionEvent::InputsRejected { .. } => "protection.inputs_rejected",
            ProtectionEvent::ExposureCalculated { .. } => "protection.exposure_calculated",
            ProtectionEvent::RecommendationMade { .. } => "protection.recommendation_made",
            ProtectionEvent::GapAnalyzed { .. } => "protection.gap_analyzed",
            ProtectionEvent::CalculationFailed { .. } => "protection.calculation_failed",
        }
    }

    /// Returns true for events that describe something going wrong.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ProtectionEvent::InputsRejected { .. } | ProtectionEvent::CalculationFailed { .. }
        )
    }
}
