//! Timestamp parsing for backend wire formats.
//!
//! The backend serializes `Instant`s as RFC 3339 strings (`2024-01-08T10:00:00Z`).
//! Offset-less date-times and bare dates are accepted as UTC as well.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Returns `None` when the string is not a recognizable date; callers keep the
/// raw string around so nothing is lost.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
