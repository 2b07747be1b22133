//! Field-level conversions from string-encoded wire values to typed values.
//!
//! Every helper takes the wire name of the field so that a failure can point at
//! the exact offending field and value.

use crate::core::VgError;
use chrono::{DateTime, Utc};

/// The single timestamp layout used by the API, e.g. `2024-03-31T00:00:00-04:00`.
pub(crate) const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Parses a non-negative integer encoded as plain decimal digits.
pub(crate) fn parse_u64(field: &'static str, value: &str) -> Result<u64, VgError> {
    let invalid = || VgError::InvalidNumericField {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

/// Like [`parse_u64`], but an absent or empty field is `None`.
pub(crate) fn parse_optional_u64(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<u64>, VgError> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => parse_u64(field, v).map(Some),
    }
}

/// Parses a finite floating point number.
pub(crate) fn parse_f64(field: &'static str, value: &str) -> Result<f64, VgError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| VgError::InvalidNumericField {
            field,
            value: value.to_string(),
        })
}

/// Converts a percentage such as `"23.45"` to a fraction (`0.2345`).
pub(crate) fn percent_to_fraction(field: &'static str, value: &str) -> Result<f64, VgError> {
    parse_f64(field, value).map(|p| p / 100.0)
}

/// Same as [`percent_to_fraction`], except that an empty value means "not reported"
/// and yields `0.0`.
pub(crate) fn optional_percent_to_fraction(
    field: &'static str,
    value: &str,
) -> Result<f64, VgError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    percent_to_fraction(field, value)
}

/// Parses a wire timestamp and normalizes it to UTC.
pub(crate) fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, VgError> {
    DateTime::parse_from_str(value, WIRE_TIME_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| VgError::InvalidTimestampField {
            field,
            value: value.to_string(),
        })
}

/// Empty wire strings become `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
