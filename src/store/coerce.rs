//! Coercion of loosely typed stored JSON into typed models.
//!
//! Stored entries come from a browser-style key-value store and may carry
//! numbers as strings, nulls, or garbage. Nothing here fails: invalid values
//! degrade to the documented defaults.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::models::{Settings, TimeEntry, parse_iso_date};

/// Largest hour count accepted for an entry or a threshold.
pub const MAX_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Largest hourly rate accepted.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Reads a non-negative decimal from a JSON number or numeric string.
///
/// Returns `None` for anything else, including negative values and blank
/// strings.
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }?;

    (parsed >= Decimal::ZERO).then(|| parsed.normalize())
}

/// Like [`coerce_decimal`], but also rejects values above `max`.
pub fn coerce_bounded(value: &Value, max: Decimal) -> Option<Decimal> {
    coerce_decimal(value).filter(|v| *v <= max)
}

// serde_json prints floats in shortest round-trip form, so `0.1` stays `0.1`.
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Reads an hour count of at most [`MAX_HOURS`], defaulting to zero.
pub fn coerce_hours(value: Option<&Value>) -> Decimal {
    value
        .and_then(|v| coerce_bounded(v, MAX_HOURS))
        .unwrap_or(Decimal::ZERO)
}

/// Builds a [`TimeEntry`] from a stored JSON object.
///
/// Returns `None` when the value is not an object or has no valid
/// `YYYY-MM-DD` date. The date must match exactly, without padding.
pub fn entry_from_value(value: &Value) -> Option<TimeEntry> {
    let object = value.as_object()?;
    let date = object
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| parse_iso_date(s).ok())?;

    Some(TimeEntry {
        date,
        hours: coerce_hours(object.get("hours")),
        threshold: object
            .get("threshold")
            .and_then(|v| coerce_bounded(v, MAX_HOURS)),
        activity: object
            .get("activity")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// Merges a stored settings object over [`Settings::default`].
///
/// Invalid rates fall back to zero. A missing, negative, non-numeric or
/// out-of-range threshold falls back to the default threshold; a threshold
/// of zero is kept.
pub fn settings_from_value(value: &Value) -> Settings {
    let defaults = Settings::default();
    let Some(object) = value.as_object() else {
        return defaults;
    };

    let field = |key: &str, max: Decimal| object.get(key).and_then(|v| coerce_bounded(v, max));

    Settings {
        rate: field("rate", MAX_RATE).unwrap_or(defaults.rate),
        rate_over: field("rateOver", MAX_RATE).unwrap_or(defaults.rate_over),
        threshold: field("threshold", MAX_HOURS).unwrap_or(defaults.threshold),
    }
}
