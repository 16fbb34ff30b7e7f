//! Serde helpers for fields the backend types loosely.
//!
//! The portfolio endpoint in particular mixes numbers with the literal
//! string `"N/A"` in the same field (`currentPrice` when no quote is
//! cached), and numeric values occasionally arrive as strings. These
//! helpers normalize all of that into `Option<f64>` at the wire boundary.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Deserializes a number, a numeric string, the literal `"n/a"` (any case),
/// or `null` into an `Option<f64>`. Use with `#[serde(with = "...")]`.
pub mod lenient_amount {
    use super::*;

    /// Serializes the amount back as a plain JSON number (or null)
    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }

    /// Accepts `Number`, numeric `String`, `"n/a"` and `null`; everything
    /// else (including unparseable strings) becomes `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(parse_lenient(&value))
    }
}

/// Extracts an `f64` out of a loosely typed JSON value, treating `"n/a"`
/// (case-insensitive) and non-numeric content as absent.
pub fn parse_lenient(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("n/a") {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }
}
