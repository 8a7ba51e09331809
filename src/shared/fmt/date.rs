//! Date formatting for chart labels and the "last updated" stat.
//!
//! All formatting happens in UTC so the output does not depend on the host's
//! local time zone.

use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Default day-level label for chart points: `1/8/2024`.
pub const DEFAULT_LABEL_FORMAT: &str = "%-m/%-d/%Y";

/// Medium date-time layout: `Jan 8, 2024, 10:00:00 AM`.
pub const MEDIUM_DATETIME_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Rendered in place of a date that could not be parsed or formatted.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an instant with a chrono `strftime` pattern.
///
/// A missing instant or a pattern chrono rejects yields [`INVALID_DATE`]
/// instead of panicking.
pub fn format_instant(instant: Option<&DateTime<Utc>>, pattern: &str) -> String {
    let Some(dt) = instant else {
        return INVALID_DATE.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", dt.format(pattern)) {
        Ok(()) => out,
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Day-level chart label using [`DEFAULT_LABEL_FORMAT`].
pub fn date_label(instant: Option<&DateTime<Utc>>) -> String {
    format_instant(instant, DEFAULT_LABEL_FORMAT)
}

/// Medium date-time for a raw timestamp string.
///
/// Falls back to the raw string when it does not parse, so the value shown is
/// never invented.
pub fn medium_datetime(raw: &str) -> String {
    match crate::shared::parse_timestamp(raw) {
        Some(dt) => format_instant(Some(&dt), MEDIUM_DATETIME_FORMAT),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_label_default() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
        assert_eq!(date_label(Some(&dt)), "1/8/2024");
    }

    #[test]
    fn test_date_label_drops_time_component() {
        let morning = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 12, 25, 23, 59, 59).unwrap();
        assert_eq!(date_label(Some(&morning)), date_label(Some(&evening)));
    }

    #[test]
    fn test_date_label_missing_instant() {
        assert_eq!(date_label(None), INVALID_DATE);
    }

    #[test]
    fn test_format_instant_custom_pattern() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
        assert_eq!(format_instant(Some(&dt), "%Y-%m-%d"), "2024-01-08");
    }

    #[test]
    fn test_format_instant_rejected_pattern() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
        assert_eq!(format_instant(Some(&dt), "%Y-%"), INVALID_DATE);
    }

    #[test]
    fn test_medium_datetime() {
        assert_eq!(
            medium_datetime("2024-01-08T10:00:00Z"),
            "Jan 8, 2024, 10:00:00 AM"
        );
        assert_eq!(
            medium_datetime("2024-01-08T22:05:09Z"),
            "Jan 8, 2024, 10:05:09 PM"
        );
    }

    #[test]
    fn test_medium_datetime_passes_through_unparseable() {
        assert_eq!(medium_datetime("not a date"), "not a date");
    }
}
