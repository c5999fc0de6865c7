// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as an RFC3339 string, the format every stored timestamp uses.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}

/// Parse a stored RFC3339 timestamp. `None` if the value is malformed.
pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Validate an activity schedule date.
///
/// Accepts the bare `YYYY-MM-DD` form produced by date inputs, or a full
/// RFC3339 timestamp.
pub fn is_valid_schedule_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() || parse_rfc3339(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_has_z_suffix() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-06-01T12:30:00Z");
    }

    #[test]
    fn test_parse_round_trip() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        let formatted = format_utc_rfc3339(now);
        assert_eq!(parse_rfc3339(&formatted), Some(now));
    }

    #[test]
    fn test_schedule_date_forms() {
        assert!(is_valid_schedule_date("2024-06-01"));
        assert!(is_valid_schedule_date("2024-06-01T00:00:00Z"));
        assert!(!is_valid_schedule_date("June 1st"));
        assert!(!is_valid_schedule_date(""));
    }
}
