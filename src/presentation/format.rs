//! Display formatting for money, crypto quantities and timestamps.
//!
//! The rules mirror en-US locale output: thousands separators, exactly two
//! fraction digits for currency, and two to eight fraction digits for crypto
//! quantities. Anything that is not a number renders as "N/A".

use crate::constants::NOT_AVAILABLE;
use crate::presentation::serialization::parse_lenient;
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("USD", "$"), ("EUR", "€"), ("GBP", "£"), ("JPY", "¥")])
});

/// A numeric display input that may be absent or malformed.
///
/// Backend payloads are not strictly typed: a money field can be a number,
/// a numeric string, the literal `"N/A"`, or missing entirely. `Amount`
/// collapses all of those at the formatting boundary so every formatter has
/// a single N/A rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// No usable numeric value
    Missing,
    /// A finite numeric value
    Number(f64),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Amount::Number(value)
        } else {
            Amount::Missing
        }
    }
}

impl From<Option<f64>> for Amount {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Amount::from(v),
            None => Amount::Missing,
        }
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("n/a") {
            return Amount::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => Amount::from(v),
            Err(_) => Amount::Missing,
        }
    }
}

impl From<&Value> for Amount {
    fn from(value: &Value) -> Self {
        Amount::from(parse_lenient(value))
    }
}

/// Formats an amount as currency with exactly two fraction digits.
///
/// Missing and non-numeric input renders as "N/A". Known currency codes use
/// their symbol (`$50,000.00`); unknown codes fall back to a code suffix
/// (`50,000.00 XYZ`).
pub fn format_currency<A: Into<Amount>>(amount: A, currency: &str) -> String {
    match amount.into() {
        Amount::Missing => NOT_AVAILABLE.to_string(),
        Amount::Number(v) => {
            let sign = if v.is_sign_negative() && v != 0.0 { "-" } else { "" };
            let magnitude = format_grouped(v.abs(), 2, 2);
            let code = currency.to_ascii_uppercase();
            match CURRENCY_SYMBOLS.get(code.as_str()) {
                Some(symbol) => format!("{sign}{symbol}{magnitude}"),
                None => format!("{sign}{magnitude} {code}"),
            }
        }
    }
}

/// Formats a crypto quantity with at least two and at most eight fraction
/// digits. Sub-cent precision matters for crypto holdings.
pub fn format_crypto_quantity<A: Into<Amount>>(quantity: A) -> String {
    match quantity.into() {
        Amount::Missing => NOT_AVAILABLE.to_string(),
        Amount::Number(v) => format_grouped(v, 2, 8),
    }
}

/// Renders a backend timestamp using en-US date-time conventions
/// (`1/15/2024, 10:30:00 AM`).
///
/// Blank input renders as "N/A"; input that does not parse is returned
/// unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    match parse_timestamp(trimmed) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Rounds to `max_frac` digits, trims trailing zeros down to `min_frac`,
/// and groups the integral part with thousands separators.
fn format_grouped(value: f64, min_frac: usize, max_frac: usize) -> String {
    let rounded = format!("{value:.max_frac$}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    format!("{sign}{}.{frac}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
