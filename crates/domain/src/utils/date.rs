//! Vendor date codec
//!
//! The vendor accepts dates as `YYYY-MM-DDTHH:MM:SSZ`, always UTC, with no
//! sub-second part.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::constants::{DATE_FORMAT, MAX_WIRE_YEAR};
use crate::errors::{CoworkError, Result};

/// Format a timestamp in the vendor wire format.
///
/// `None` formats the current time. Sub-second precision is dropped.
///
/// Only years 0 through 9999 fit the four-digit wire format; other years are
/// rendered with a sign and extra digits that [`parse_date`] rejects. Use
/// [`from_unix`] to check a timestamp before formatting it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use cowork_domain::format_date;
///
/// let ts = Utc.with_ymd_and_hms(2017, 3, 9, 8, 5, 1).unwrap();
/// assert_eq!(format_date(Some(ts)), "2017-03-09T08:05:01Z");
/// ```
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.unwrap_or_else(Utc::now).format(DATE_FORMAT).to_string()
}

/// Parse a vendor wire date into a UTC timestamp.
///
/// # Errors
/// Returns `CoworkError::InvalidInput` if `value` is not in the wire format.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| CoworkError::InvalidInput(format!("invalid date '{value}': {e}")))
}

/// Convert a Unix timestamp (seconds) into a timestamp the wire format can
/// carry.
///
/// # Errors
/// Returns `CoworkError::InvalidInput` if the timestamp falls outside years
/// 0 through 9999.
pub fn from_unix(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .filter(|ts| (0..=MAX_WIRE_YEAR).contains(&ts.year()))
        .ok_or_else(|| CoworkError::InvalidInput(format!("timestamp out of range: {secs}")))
}

/// Format a Unix timestamp (seconds) in the vendor wire format.
///
/// # Errors
/// Returns `CoworkError::InvalidInput` if the timestamp is out of range.
pub fn format_unix(secs: i64) -> Result<String> {
    from_unix(secs).map(|ts| format_date(Some(ts)))
}

/// Parse a vendor wire date into a Unix timestamp (seconds).
///
/// # Errors
/// Returns `CoworkError::InvalidInput` if `value` is not in the wire format.
pub fn parse_unix(value: &str) -> Result<i64> {
    parse_date(value).map(|ts| ts.timestamp())
}

/// Parse the timestamps found inside vendor records.
///
/// Records are less strict than query filters: besides the wire format they
/// carry RFC 3339 values and naive local-looking values that are UTC.
pub fn parse_lenient(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = parse_date(value) {
        return Some(ts);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|naive| naive.and_utc())
}
