//! Parsing of the free-text hours field

use serde::Serialize;

/// Strict reading of the hours field, used for field-level warnings only
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ParsedHours {
    /// Nothing typed yet
    Empty,
    /// The whole field is a finite, non-negative number
    Valid(f64),
    /// Something was typed but it is not a usable number
    Invalid,
}

impl ParsedHours {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        match trimmed.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours >= 0.0 => Self::Valid(hours),
            _ => Self::Invalid,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid(hours) => Some(*hours),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Hours used for pricing
///
/// Reads the longest leading decimal number, the way a browser's
/// `parseFloat` does, so `"2h"` prices as two hours and `"-3"` as minus
/// three. Unreadable and non-finite input price as zero. Negative hours are
/// flagged through [`ParsedHours`], not corrected here.
pub fn lenient_hours(text: &str) -> f64 {
    leading_decimal(text)
        .filter(|hours| hours.is_finite())
        .unwrap_or(0.0)
}

fn leading_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
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
        if digits + (frac_end - frac_start) > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
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
