// ABOUTME: Date parsing contract for marked element text.
// ABOUTME: Accepts ISO-8601/RFC 3339/RFC 2822 and a short list of textual day-month-year forms.

//! Date parsing for element text.
//!
//! The accepted inputs are a deliberately closed list rather than a
//! parse-anything routine; unrestricted date guessing is a classic source of
//! silent cross-locale bugs (is `01/02/2021` January or February?).
//!
//! Accepted forms, tried in order:
//! 1. RFC 3339: `2021-01-15T13:45:30Z`, fractional seconds, numeric offsets.
//! 2. RFC 2822: `Fri, 15 Jan 2021 13:45:30 +0000`.
//! 3. ISO date-time with numeric offset: `2021-01-15T13:45:30+01:00` or
//!    compact `+0100`.
//! 4. Naive ISO date-time, `T`- or space-separated, assumed UTC.
//! 5. Textual day-month-year: `15 Jan 2021`, single-digit day allowed,
//!    optionally followed by `HH:MM:SS` (assumed UTC).
//! 6. ISO calendar date: `2021-01-15`, taken as midnight UTC.
//!
//! Anything else, including this crate's own localized output such as
//! `January 15, 2021`, yields `None`. Rewritten text therefore stays inert
//! on a second pass instead of drifting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

// Offset-carrying forms beyond what the RFC parsers cover.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%dT%H:%M:%S%z"];

// Forms without a timezone, taken as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%e %b %Y %H:%M:%S",
];
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%e %b %Y"];

/// Parses element text as a date/time value, normalized to UTC.
///
/// Returns `None` for empty input and for any form outside the documented
/// list; the caller treats that as "leave the text alone".
pub fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_date_text("2021-01-15T13:45:30Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 13, 45, 30).unwrap());
    }

    #[test]
    fn parses_rfc2822_and_converts_to_utc() {
        let dt = parse_date_text("Fri, 15 Jan 2021 13:45:30 -0700").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 20, 45, 30).unwrap());
    }

    #[test]
    fn parses_iso_with_numeric_offset() {
        let dt = parse_date_text("2021-01-15T13:45:30+01:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 12, 45, 30).unwrap());
        let compact = parse_date_text("2021-01-15T13:45:30+0100").unwrap();
        assert_eq!(compact, dt);
    }

    #[test]
    fn naive_datetime_is_taken_as_utc() {
        let dt = parse_date_text("2021-01-15 13:45:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 13, 45, 30).unwrap());
        let t_sep = parse_date_text("2021-01-15T13:45:30").unwrap();
        assert_eq!(t_sep, dt);
    }

    #[test]
    fn parses_textual_day_month_year() {
        let dt = parse_date_text("15 Jan 2021").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 0, 0, 0).unwrap());
        let single = parse_date_text("5 Jan 2021").unwrap();
        assert_eq!(single.hour(), 0);
    }

    #[test]
    fn parses_calendar_date_as_midnight_utc() {
        let dt = parse_date_text("2021-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_date_text("  2021-01-15  ").is_some());
    }

    #[test]
    fn rejects_empty_and_junk() {
        assert_eq!(parse_date_text(""), None);
        assert_eq!(parse_date_text("   "), None);
        assert_eq!(parse_date_text("hello world"), None);
        assert_eq!(parse_date_text("2021-13-40"), None);
    }

    #[test]
    fn rejects_own_localized_output() {
        // Rendered text must not round-trip into a fresh parse.
        assert_eq!(parse_date_text("January 15, 2021"), None);
        assert_eq!(parse_date_text("15.01.2021"), None);
        assert_eq!(parse_date_text("15 de enero de 2021"), None);
    }
}
