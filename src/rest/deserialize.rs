//! Wire value deserializers.
//!
//! Each function takes the raw JSON value of a payload field (`None` when the
//! key is absent) and returns the typed value. Absent and `null` inputs pass
//! through as `Ok(None)`; malformed input is reported as a [`ParseError`].
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use twilio_api::rest::deserialize;
//!
//! let payload = json!({
//!     "current_size": "0",
//!     "date_created": "Tue, 04 Aug 2015 18:39:09 +0000",
//!     "latitude": "19.720000",
//!     "end_time": null,
//! });
//!
//! assert_eq!(deserialize::integer(payload.get("current_size")).unwrap(), Some(0));
//! assert!(deserialize::rfc2822_datetime(payload.get("date_created")).unwrap().is_some());
//! assert!(deserialize::decimal(payload.get("latitude")).unwrap().is_some());
//! assert_eq!(deserialize::iso8601_datetime(payload.get("end_time")).unwrap(), None);
//! assert_eq!(deserialize::integer(payload.get("missing")).unwrap(), None);
//! ```

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

/// ISO 8601 timestamp format emitted by the API.
const ISO8601_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// ISO 8601 calendar date format.
const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

/// A field value that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unable to parse {value} as {expected}")]
pub struct ParseError {
    /// The expected type.
    pub expected: &'static str,
    /// The offending value, as JSON text.
    pub value: String,
}

impl ParseError {
    fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            value: value.to_string(),
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Parses an integer from a JSON number or numeric string.
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not an integer.
pub fn integer(value: Option<&Value>) -> Result<Option<i64>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| ParseError::new("integer", value))
}

/// Parses an RFC 2822 timestamp (`Tue, 04 Aug 2015 18:39:09 +0000`).
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not an RFC 2822 timestamp.
pub fn rfc2822_datetime(value: Option<&Value>) -> Result<Option<DateTime<Utc>>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc2822(s.trim()).ok())
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .ok_or_else(|| ParseError::new("RFC 2822 datetime", value))
}

/// Parses an ISO 8601 timestamp (`2015-07-30T20:00:00Z`, or any RFC 3339 offset).
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not an ISO 8601 timestamp.
pub fn iso8601_datetime(value: Option<&Value>) -> Result<Option<DateTime<Utc>>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    value
        .as_str()
        .map(str::trim)
        .and_then(|s| {
            NaiveDateTime::parse_from_str(s, ISO8601_DATETIME_FORMAT)
                .map(|naive| Utc.from_utc_datetime(&naive))
                .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)))
                .ok()
        })
        .map(Some)
        .ok_or_else(|| ParseError::new("ISO 8601 datetime", value))
}

/// Parses an ISO 8601 calendar date (`2015-07-30`).
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not an ISO 8601 date.
pub fn iso8601_date(value: Option<&Value>) -> Result<Option<NaiveDate>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), ISO8601_DATE_FORMAT).ok())
        .map(Some)
        .ok_or_else(|| ParseError::new("ISO 8601 date", value))
}

/// Parses an arbitrary-precision decimal from a JSON number or string.
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not a decimal number.
pub fn decimal(value: Option<&Value>) -> Result<Option<BigDecimal>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| ParseError::new("decimal", value))
}

/// Reads a string field.
///
/// # Errors
///
/// Returns [`ParseError`] if the value is present but not a string.
pub fn string(value: Option<&Value>) -> Result<Option<String>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    value
        .as_str()
        .map(|s| Some(s.to_string()))
        .ok_or_else(|| ParseError::new("string", value))
}

/// Reads a boolean field from a JSON boolean or `"true"`/`"false"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the value is not a boolean.
pub fn boolean(value: Option<&Value>) -> Result<Option<bool>, ParseError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| ParseError::new("boolean", value))
}

/// Passes an arbitrary JSON field through unchanged.
#[must_use]
pub fn json(value: Option<&Value>) -> Option<Value> {
    present(value).cloned()
}
