//! Money value object for US dollar amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A dollar amount as entered by the user.
///
/// Amounts are not clamped: negative values pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new amount.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parses a raw form value the way a browser's `parseFloat` does.
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used,
    /// so `"1200 dollars"` is 1200. Anything without a numeric prefix, and
    /// any NaN result, becomes zero. Never fails.
    pub fn parse(raw: &str) -> Self {
        let value = numeric_prefix(raw.trim_start()).unwrap_or(0.0);
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value)
        }
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true for finite amounts.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Formats as whole US dollars with thousands separators, e.g. `$150,000`.
    ///
    /// Rounds half away from zero. Non-finite amounts render as `$0`.
    pub fn format_usd(&self) -> String {
        if !self.0.is_finite() {
            return "$0".to_string();
        }
        let rounded = self.0.round();
        if rounded == 0.0 {
            return "$0".to_string();
        }

        let digits = format!("{:.0}", rounded.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if rounded < 0.0 {
            format!("-${}", grouped)
        } else {
            format!("${}", grouped)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_usd())
    }
}

/// Parses the longest decimal prefix of `s`, or `None` when there is none.
fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits = has_digits || frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
