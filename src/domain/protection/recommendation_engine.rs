//! Recommendation Engine - maps exposure to a coverage tier.
//!
//! Bands are evaluated top to bottom and the first band whose inclusive upper
//! bound holds wins. Anything above the last bound, including values that do
//! not compare (NaN), falls through to the umbrella tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Money;

/// Label of the top tier.
pub const UMBRELLA_TIER_LABEL: &str = "500/500 + $1M Umbrella";

/// Recommended liability tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CoverageTier {
    #[serde(rename = "30/60")]
    Limits30_60,
    #[serde(rename = "50/100")]
    Limits50_100,
    #[serde(rename = "100/300")]
    Limits100_300,
    #[serde(rename = "500/500")]
    Limits500_500,
    #[serde(rename = "500/500 + $1M Umbrella")]
    Umbrella,
}

impl CoverageTier {
    /// All tiers, lowest first.
    pub const ALL: [CoverageTier; 5] = [
        CoverageTier::Limits30_60,
        CoverageTier::Limits50_100,
        CoverageTier::Limits100_300,
        CoverageTier::Limits500_500,
        CoverageTier::Umbrella,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CoverageTier::Limits30_60 => "30/60",
            CoverageTier::Limits50_100 => "50/100",
            CoverageTier::Limits100_300 => "100/300",
            CoverageTier::Limits500_500 => "500/500",
            CoverageTier::Umbrella => UMBRELLA_TIER_LABEL,
        }
    }

    /// Looks a tier up by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }
}

impl fmt::Display for CoverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How far a tier's exposure band is from being well protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Insufficient,
    Adequate,
    Excellent,
}

impl GapSeverity {
    /// Returns the styling class used by presenters.
    pub fn as_str(&self) -> &'static str {
        match self {
            GapSeverity::Insufficient => "insufficient",
            GapSeverity::Adequate => "adequate",
            GapSeverity::Excellent => "excellent",
        }
    }
}

impl fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tier recommended for an exposure, with its severity and advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub coverage_tier: CoverageTier,
    pub gap_severity: GapSeverity,
    pub advisory_message: String,
}

struct Band {
    upper_inclusive: f64,
    tier: CoverageTier,
    severity: GapSeverity,
    message: &'static str,
}

static BANDS: [Band; 4] = [
    Band {
        upper_inclusive: 60_000.0,
        tier: CoverageTier::Limits30_60,
        severity: GapSeverity::Insufficient,
        message: "You may need higher coverage to protect your assets",
    },
    Band {
        upper_inclusive: 100_000.0,
        tier: CoverageTier::Limits50_100,
        severity: GapSeverity::Insufficient,
        message: "Consider increasing your liability coverage",
    },
    Band {
        upper_inclusive: 300_000.0,
        tier: CoverageTier::Limits100_300,
        severity: GapSeverity::Adequate,
        message: "Your current coverage may be adequate",
    },
    Band {
        upper_inclusive: 500_000.0,
        tier: CoverageTier::Limits500_500,
        severity: GapSeverity::Adequate,
        message: "Higher limits recommended for better protection",
    },
];

static TOP_BAND: Band = Band {
    upper_inclusive: f64::INFINITY,
    tier: CoverageTier::Umbrella,
    severity: GapSeverity::Excellent,
    message: "Excellent coverage for high-value assets",
};

/// Engine mapping exposure amounts to recommendations.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Recommends a tier for the given exposure.
    ///
    /// Zero and negative exposures land in the lowest band.
    pub fn recommend(exposure: Money) -> Recommendation {
        let value = exposure.value();
        let band = BANDS
            .iter()
            .find(|band| value <= band.upper_inclusive)
            .unwrap_or(&TOP_BAND);

        Recommendation {
            coverage_tier: band.tier,
            gap_severity: band.severity,
            advisory_message: band.message.to_string(),
        }
    }
}
