//! Protection Module - the exposure-to-recommendation decision core.
//!
//! All functions here are pure (no side effects) and stateless. They take
//! form data or domain values and return computed results; identical
//! inputs always give identical outputs.
//!
//! # Components
//!
//! - `ExposureCalculator` - Sums declared asset values
//! - `RecommendationEngine` - Fixed threshold bands from exposure to tier
//! - `GapAnalyzer` - Current coverage vs. recommended tier
//! - `Assessment` - The three steps composed

mod assessment;
mod asset_inputs;
mod current_coverage;
mod events;
mod exposure_calculator;
pub mod form_fields;
mod gap_analyzer;
mod recommendation_engine;

pub use assessment::Assessment;
pub use asset_inputs::AssetInputs;
pub use current_coverage::{CurrentCoverage, BASELINE_LIMIT};
pub use events::ProtectionEvent;
pub use exposure_calculator::{ExposureBreakdown, ExposureCalculator};
pub use form_fields::FormFields;
pub use gap_analyzer::{GapAnalyzer, GapVerdict, UMBRELLA_LIMIT};
pub use recommendation_engine::{
    CoverageTier, GapSeverity, Recommendation, RecommendationEngine, UMBRELLA_TIER_LABEL,
};
