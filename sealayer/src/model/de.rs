//! Lenient deserialization helpers for upstream catalogue exports.
//!
//! The published JSON documents are hand-maintained and drift over time:
//! numeric scores arrive as numbers, numeric strings or `null`, and
//! categorical fields occasionally carry unexpected labels. Parsing never
//! rejects a record for a malformed field; each helper folds bad input to
//! a documented default instead.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a 0-100 score that may arrive as a number, a numeric
/// string, `null`, or garbage. Anything unparseable becomes `0.0`, as does
/// a non-finite value.
pub(crate) fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(score_from_value(&value))
}

fn score_from_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

/// Deserialize an optional year that may arrive as a number, a numeric
/// string, or `null`.
pub(crate) fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(year_from_value(&value))
}

pub(crate) fn year_from_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().map(|y| y as i32),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
