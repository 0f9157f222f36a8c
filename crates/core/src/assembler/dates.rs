//! Date normalization
//!
//! Fatture in Cloud expects plain `YYYY-MM-DD` calendar dates. Hosts send
//! whatever their date picker produces, so the common shapes are accepted
//! and reduced to the UTC calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ficbridge_domain::{BridgeError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Reduce a date or timestamp to `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps (converted to UTC), naive date-times (read as
/// UTC) and plain dates.
///
/// # Errors
///
/// `BridgeError::Validation` naming `field` when the value matches none of
/// the accepted shapes.
pub fn normalize_date(field: &str, raw: &str) -> Result<String> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(format_date(timestamp.with_timezone(&Utc).date_naive()));
    }

    if let Some(naive) =
        NAIVE_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Ok(format_date(naive.date()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).map(format_date).map_err(|_| {
        BridgeError::Validation(format!(
            "Invalid date for '{field}': '{raw}'. Expected YYYY-MM-DD or an ISO 8601 timestamp."
        ))
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
