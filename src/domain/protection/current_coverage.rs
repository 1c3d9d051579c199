//! CurrentCoverage - the user's self-reported auto liability tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Limit assumed for "Not sure" and for any category the selector does not offer.
pub const BASELINE_LIMIT: u64 = 50_000;

/// Categories offered by the current-coverage selector.
///
/// Unknown labels are preserved verbatim in `Unrecognized` so they can be
/// echoed back in the emailed summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrentCoverage {
    NotSure,
    Limits25_50,
    Limits30_60,
    Limits50_100,
    Limits100_300,
    Limits250_500,
    Limits500_500,
    Limits500_1000,
    Unrecognized(String),
}

impl CurrentCoverage {
    /// Every category the selector offers, in display order.
    pub const OFFERED: [CurrentCoverage; 8] = [
        CurrentCoverage::NotSure,
        CurrentCoverage::Limits25_50,
        CurrentCoverage::Limits30_60,
        CurrentCoverage::Limits50_100,
        CurrentCoverage::Limits100_300,
        CurrentCoverage::Limits250_500,
        CurrentCoverage::Limits500_500,
        CurrentCoverage::Limits500_1000,
    ];

    /// Maps a selector label to its category. Never fails.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Not sure" => CurrentCoverage::NotSure,
            "25/50" => CurrentCoverage::Limits25_50,
            "30/60" => CurrentCoverage::Limits30_60,
            "50/100" => CurrentCoverage::Limits50_100,
            "100/300" => CurrentCoverage::Limits100_300,
            "250/500" => CurrentCoverage::Limits250_500,
            "500/500" => CurrentCoverage::Limits500_500,
            "500/1000" => CurrentCoverage::Limits500_1000,
            other => CurrentCoverage::Unrecognized(other.to_string()),
        }
    }

    /// Returns the selector label.
    pub fn label(&self) -> &str {
        match self {
            CurrentCoverage::NotSure => "Not sure",
            CurrentCoverage::Limits25_50 => "25/50",
            CurrentCoverage::Limits30_60 => "30/60",
            CurrentCoverage::Limits50_100 => "50/100",
            CurrentCoverage::Limits100_300 => "100/300",
            CurrentCoverage::Limits250_500 => "250/500",
            CurrentCoverage::Limits500_500 => "500/500",
            CurrentCoverage::Limits500_1000 => "500/1000",
            CurrentCoverage::Unrecognized(label) => label,
        }
    }

    /// Returns the representative dollar limit used for gap analysis.
    ///
    /// This is the per-person figure of the pair, not the per-accident one,
    /// so "500/1000" maps to the same limit as "500/500".
    pub fn representative_limit(&self) -> u64 {
        match self {
            CurrentCoverage::NotSure => BASELINE_LIMIT,
            CurrentCoverage::Limits25_50 => 25_000,
            CurrentCoverage::Limits30_60 => 30_000,
            CurrentCoverage::Limits50_100 => 50_000,
            CurrentCoverage::Limits100_300 => 100_000,
            CurrentCoverage::Limits250_500 => 250_000,
            CurrentCoverage::Limits500_500 => 500_000,
            CurrentCoverage::Limits500_1000 => 500_000,
            CurrentCoverage::Unrecognized(_) => BASELINE_LIMIT,
        }
    }

    /// Returns true when the label was not one the selector offers.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CurrentCoverage::Unrecognized(_))
    }
}

impl From<String> for CurrentCoverage {
    fn from(label: String) -> Self {
        CurrentCoverage::from_label(&label)
    }
}

impl From<CurrentCoverage> for String {
    fn from(coverage: CurrentCoverage) -> Self {
        coverage.label().to_string()
    }
}

impl fmt::Display for CurrentCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
