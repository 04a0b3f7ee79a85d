//! Lenient numeric coercion for form-style input.
//!
//! Course price and duration fields historically arrived as free-text form
//! values. Clients still send them as either JSON numbers or strings, and
//! unparseable input falls back to zero / null rather than rejecting the
//! whole request. Use with `#[serde(deserialize_with = ...)]` on DTO fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a price-like field: number, numeric string, or garbage.
///
/// Falls back to `0.0` for missing, empty, or non-numeric input.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_f64(value.as_ref()))
}

/// Deserialize an optional integer field: number, numeric string, or garbage.
///
/// Falls back to `None` for missing, empty, or non-numeric input.
pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_i32(value.as_ref()))
}

fn coerce_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_i32(value: Option<&Value>) -> Option<i32> {
    match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
