//! Coercion of loosely-typed form values into record fields.
//!
//! Clients post whatever their inputs hold, so a category id may arrive as
//! `3`, `"3"` or `""`, and an amount as `12.5` or `"12.50"`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses the leading integer of `input` the way a form-field `parseInt` does:
/// leading whitespace is skipped, an optional sign is honoured and parsing
/// stops at the first non-digit. Returns `None` when no digit is found.
pub fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerces a raw category value to an id. Unparsable input yields `None`,
/// which is stored as `null` rather than rejected.
pub fn category_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Coerces a raw amount value to a number. Absent or blank amounts are zero.
pub fn amount_from_value(value: &Value) -> Result<f64, String> {
    match value {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("Amount {} is out of range", n)),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| format!("Amount must be a number, got '{}'", s)),
        other => Err(format!("Amount must be a number, got {}", other)),
    }
}

/// Parses the calendar day of a record date, ignoring any time component.
pub fn parse_record_date(date: &str) -> Option<NaiveDate> {
    let day = date.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Reads a persisted amount. Files may hold whatever a client once posted, so
/// an amount that is not a number counts as zero rather than failing the
/// whole collection.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value).unwrap_or(0.0))
}

pub fn lenient_category<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(category_from_value(&value))
}
