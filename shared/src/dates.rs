//! Calendar-day canonicalization.
//!
//! Every reservation lookup goes through the helpers in this module so the
//! store, the range selector and the submitter agree on which calendar day a
//! value refers to. Days picked on the calendar grid are already calendar
//! days and are formatted as-is; dates coming off the wire are instants and
//! are truncated to their UTC calendar day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DateParseError;

/// Canonical key format, e.g. `2024-10-20`
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// Format a locally constructed calendar date as its canonical `YYYY-MM-DD` key.
///
/// The viewer's timezone never shifts the result: October 20 on the grid is
/// always `2024-10-20`.
pub fn local_date_to_iso_day(date: NaiveDate) -> String {
    date.format(ISO_DAY_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` key back into a calendar date
pub fn parse_iso_day(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DAY_FORMAT)
        .map_err(|_| DateParseError::new(value))
}

/// Parse a date string received from the reservation service into the UTC
/// calendar day it denotes.
///
/// Accepts RFC 3339 instants (any offset, with or without a colon),
/// date-times without an offset (read as UTC) and plain dates.
pub fn parse_wire_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }

    // ISO offsets without a colon, e.g. `+0000`
    if let Ok(instant) = DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().date_naive());
        }
    }

    parse_iso_day(trimmed).map_err(|_| DateParseError::new(value))
}

/// Canonical key for a date string received from the reservation service
pub fn iso_day_from_wire(value: &str) -> Result<String, DateParseError> {
    parse_wire_date(value).map(local_date_to_iso_day)
}

/// Every calendar day from `start` to `end`, inclusive and ascending.
/// Empty when `end` is before `start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_date_to_iso_day() {
        assert_eq!(local_date_to_iso_day(day(2024, 10, 20)), "2024-10-20");
        assert_eq!(local_date_to_iso_day(day(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn test_utc_midnight_instant_keeps_its_day() {
        assert_eq!(iso_day_from_wire("2024-10-20T00:00:00.000Z").unwrap(), "2024-10-20");
        assert_eq!(
            iso_day_from_wire("2024-10-20T00:00:00.000Z").unwrap(),
            local_date_to_iso_day(day(2024, 10, 20))
        );
    }

    #[test]
    fn test_offset_instant_truncates_to_utc_day() {
        // 08:00 in Seoul on the 21st is still the 20th in UTC
        assert_eq!(parse_wire_date("2024-10-21T08:00:00+09:00").unwrap(), day(2024, 10, 20));
        assert_eq!(parse_wire_date("2024-10-20T23:30:00-02:00").unwrap(), day(2024, 10, 21));
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(parse_wire_date("2024-10-21T00:00:00.000+0000").unwrap(), day(2024, 10, 21));
        assert_eq!(parse_wire_date("2024-10-21T08:00:00+0900").unwrap(), day(2024, 10, 20));
    }

    #[test]
    fn test_naive_and_plain_dates() {
        assert_eq!(parse_wire_date("2024-10-20T15:45:00").unwrap(), day(2024, 10, 20));
        assert_eq!(parse_wire_date("2024-10-20").unwrap(), day(2024, 10, 20));
        assert_eq!(parse_wire_date(" 2024-11-18 ").unwrap(), day(2024, 11, 18));
    }

    #[test]
    fn test_unparseable_wire_date() {
        let err = parse_wire_date("next tuesday").unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
        assert!(parse_wire_date("2024-13-01").is_err());
        assert!(parse_iso_day("").is_err());
    }

    #[test]
    fn test_days_inclusive_crosses_month_boundary() {
        let days: Vec<_> = days_inclusive(day(2024, 10, 30), day(2024, 11, 2)).collect();
        assert_eq!(
            days,
            vec![day(2024, 10, 30), day(2024, 10, 31), day(2024, 11, 1), day(2024, 11, 2)]
        );
    }

    #[test]
    fn test_days_inclusive_single_and_reversed() {
        assert_eq!(days_inclusive(day(2024, 10, 20), day(2024, 10, 20)).count(), 1);
        assert_eq!(days_inclusive(day(2024, 10, 21), day(2024, 10, 20)).count(), 0);
    }
}
