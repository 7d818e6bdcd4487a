//! Page Models
//!
//! Values read off server-rendered elements.

use serde::Serialize;

/// Macro-nutrient grams carried by the chart anchor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroBreakdown {
    pub fn new(protein: f64, carbs: f64, fats: f64) -> Self {
        Self { protein, carbs, fats }
    }

    /// Build from raw `data-*` attribute values; anything unusable becomes 0
    pub fn from_attributes(protein: Option<&str>, carbs: Option<&str>, fats: Option<&str>) -> Self {
        Self {
            protein: parse_macro_value(protein),
            carbs: parse_macro_value(carbs),
            fats: parse_macro_value(fats),
        }
    }

    /// Chart series order: protein, carbs, fats
    pub fn series(&self) -> [f64; 3] {
        [self.protein, self.carbs, self.fats]
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// Share of the total per macro, in percent. All zero for an empty breakdown.
    pub fn percentages(&self) -> [f64; 3] {
        let total = self.total();
        if total <= 0.0 {
            return [0.0; 3];
        }
        self.series().map(|v| v / total * 100.0)
    }
}

/// Parse a macro attribute the way `parseFloat` reads it: leading whitespace is
/// skipped and the longest numeric prefix wins ("30g" is 30).
/// Missing, non-numeric and non-finite values give 0.
pub fn parse_macro_value(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let value = numeric_prefix(raw.trim_start())
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
