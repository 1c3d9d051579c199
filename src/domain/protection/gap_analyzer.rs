//! Gap Analyzer - compares current coverage against the recommended tier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::current_coverage::CurrentCoverage;
use super::recommendation_engine::{CoverageTier, UMBRELLA_TIER_LABEL};

/// Dollar limit of the umbrella tier.
pub const UMBRELLA_LIMIT: u64 = 1_000_000;

/// Outcome of comparing current coverage against the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapVerdict {
    /// Current limit is below the recommended limit.
    Insufficient,
    /// Current limit equals the recommended limit.
    Matched,
    /// Current limit exceeds the recommended limit.
    WellCovered,
}

impl GapVerdict {
    /// Returns the user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            GapVerdict::Insufficient => "Insufficient coverage",
            GapVerdict::Matched => "Good match",
            GapVerdict::WellCovered => "Well covered",
        }
    }

    /// Returns the machine form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GapVerdict::Insufficient => "insufficient",
            GapVerdict::Matched => "matched",
            GapVerdict::WellCovered => "well-covered",
        }
    }
}

impl fmt::Display for GapVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Analyzer for coverage gaps.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Compares a current-coverage label against a recommended tier label.
    ///
    /// Unknown current labels use the baseline limit. A recommended label
    /// whose limit cannot be read compares as neither lower nor equal, so
    /// it yields `WellCovered`.
    pub fn analyze(current_coverage: &str, recommended_tier: &str) -> GapVerdict {
        let current = CurrentCoverage::from_label(current_coverage).representative_limit();
        match Self::recommended_limit(recommended_tier) {
            Some(recommended) => Self::compare(current, recommended),
            None => GapVerdict::WellCovered,
        }
    }

    /// Typed form of [`analyze`](Self::analyze).
    pub fn analyze_tier(current: &CurrentCoverage, recommended: CoverageTier) -> GapVerdict {
        Self::analyze(current.label(), recommended.label())
    }

    /// Reads the dollar limit of a tier label.
    ///
    /// The umbrella tier is worth [`UMBRELLA_LIMIT`]. Any other `low/high`
    /// label is quoted in thousands and worth its per-person figure, the
    /// same unit the current-coverage table uses, so "100/300" is 100,000.
    pub fn recommended_limit(tier_label: &str) -> Option<u64> {
        if tier_label == UMBRELLA_TIER_LABEL {
            return Some(UMBRELLA_LIMIT);
        }
        let (per_person, _per_accident) = tier_label.split_once('/')?;
        leading_integer(per_person)?.checked_mul(1_000)
    }

    fn compare(current: u64, recommended: u64) -> GapVerdict {
        match current.cmp(&recommended) {
            Ordering::Less => GapVerdict::Insufficient,
            Ordering::Equal => GapVerdict::Matched,
            Ordering::Greater => GapVerdict::WellCovered,
        }
    }
}

fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
