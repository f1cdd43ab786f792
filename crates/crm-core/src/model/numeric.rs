//! Numeric coercion for values that arrive as text or loosely typed JSON.
//!
//! A finite number, or a string that parses as one after trimming, is taken
//! as-is (an explicit `0` stays `0`). Anything else takes the caller's
//! fallback: missing, null, empty, unparseable, NaN and infinities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse a string into a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Coerce an optional JSON value into a number, using `fallback` when it
/// cannot be read as a finite number.
pub fn coerce_number(value: Option<&Value>, fallback: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|n| n.is_finite()).unwrap_or(fallback),
        Some(Value::String(s)) => parse_number(s).unwrap_or(fallback),
        _ => fallback,
    }
}

/// Coerce a number into a non-negative integer count, truncating toward zero.
pub fn to_count(value: f64, fallback: u32) -> u32 {
    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return fallback;
    }
    value.trunc() as u32
}

/// Coerce an optional JSON value into a non-negative integer count.
pub fn coerce_count(value: Option<&Value>, fallback: u32) -> u32 {
    match value {
        Some(Value::Number(_)) | Some(Value::String(_)) => {
            let n = coerce_number(value, f64::NAN);
            to_count(n, fallback)
        }
        _ => fallback,
    }
}

/// A numeric field as supplied by a caller: either a number or the text a
/// user typed into a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Resolve to a number, using `fallback` when the input is not numeric.
    pub fn resolve(&self, fallback: f64) -> f64 {
        match self {
            NumberInput::Number(n) if n.is_finite() => *n,
            NumberInput::Number(_) => fallback,
            NumberInput::Text(s) => parse_number(s).unwrap_or(fallback),
        }
    }

    /// Resolve to a non-negative integer count.
    pub fn resolve_count(&self, fallback: u32) -> u32 {
        to_count(self.resolve(f64::NAN), fallback)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}
