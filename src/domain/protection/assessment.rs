//! Assessment - the full exposure → recommendation → gap pipeline.

use serde::{Deserialize, Serialize};

use super::asset_inputs::AssetInputs;
use super::exposure_calculator::ExposureCalculator;
use super::gap_analyzer::{GapAnalyzer, GapVerdict};
use super::recommendation_engine::{Recommendation, RecommendationEngine};
use crate::domain::foundation::Money;

/// Everything derived from one set of inputs.
///
/// # Invariants
///
/// - Every field is a pure function of the `AssetInputs` it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub exposure: Money,
    pub recommendation: Recommendation,
    pub gap_verdict: GapVerdict,
}

impl Assessment {
    /// Runs the pipeline over the given inputs.
    pub fn of(inputs: &AssetInputs) -> Self {
        let exposure = ExposureCalculator::calculate(inputs);
        let recommendation = RecommendationEngine::recommend(exposure);
        let gap_verdict =
            GapAnalyzer::analyze_tier(&inputs.current_coverage, recommendation.coverage_tier);

        Self {
            exposure,
            recommendation,
            gap_verdict,
        }
    }
}
