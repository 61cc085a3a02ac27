//! Common utilities shared across the exchange-rate tools.
//!
//! Argument validation, JSON field access and text formatting helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::domains::tools::ToolError;
use crate::domains::upstream::UpstreamError;

/// Date format accepted by the upstream API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest magnitude at which every whole `f64` is an exact integer (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Reject empty (or whitespace-only) values for a required string argument.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ToolError> {
    if value.len() != 10 {
        return Err(invalid_date(field, value));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid_date(field, value))
}

/// Parse an optional date argument; absent and empty values are both skipped.
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<(), ToolError> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => parse_date(field, v).map(|_| ()),
        None => Ok(()),
    }
}

/// Validate a `start_date`/`end_date` pair.
pub fn validate_range(start: &str, end: &str) -> Result<(), ToolError> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;
    if start_date > end_date {
        return Err(ToolError::invalid_arguments(format!(
            "start_date ({}) is after end_date ({})",
            start, end
        )));
    }
    Ok(())
}

fn invalid_date(field: &str, value: &str) -> ToolError {
    ToolError::invalid_arguments(format!(
        "'{}' must be a date in YYYY-MM-DD format, got '{}'",
        field, value
    ))
}

/// Accept either a JSON number or a numeric string.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(whole_number(n)),
        Value::String(s) => serde_json::from_str::<Number>(s.trim())
            .map(whole_number)
            .map_err(|_| serde::de::Error::custom(format!("'{}' is not a number", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

/// Turn a whole-valued float (`100.0`) into an integer (`100`), so numbers
/// are sent and displayed without a trailing `.0`.
pub fn whole_number(n: Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            Number::from(f as i64)
        }
        _ => n,
    }
}

/// Apply [`whole_number`] to every number inside a JSON value.
pub fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(whole_number(n.clone())),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Get a top-level field of an upstream response.
pub fn field<'a>(data: &'a Value, name: &str) -> Result<&'a Value, ToolError> {
    data.get(name).ok_or_else(|| missing_field(name))
}

/// Pretty-print a top-level field of an upstream response.
pub fn pretty_field(data: &Value, name: &str) -> Result<String, ToolError> {
    serde_json::to_string_pretty(&normalize_numbers(field(data, name)?))
        .map_err(|e| ToolError::internal(e.to_string()))
}

/// Render a JSON scalar for inline display (strings without quotes).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => whole_number(n.clone()).to_string(),
        other => other.to_string(),
    }
}

fn missing_field(name: &str) -> ToolError {
    UpstreamError::invalid_response(format!("missing `{}` field", name)).into()
}
