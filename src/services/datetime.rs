// src/services/datetime.rs

//! Cardinal-Gate timestamp parsing.
//!
//! The site renders play timestamps with an ordinal day, abbreviated month
//! and 24-hour time, and omits the year for entries from the current year:
//!
//! - `3rd Aug 2024, 14:05 UTC`
//! - `21st Dec, 9:07 +0000`
//!
//! The zone is either a numeric offset or the literal `UTC`, which is
//! equivalent to `+0000`.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local};
use regex::Regex;

use crate::error::{AppError, Result};

/// Month abbreviation followed by a 4-digit year, e.g. "Aug 2024". Presence
/// selects the year-bearing layout.
fn year_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w{3} \d{4}").expect("valid regex"))
}

/// Ordinal suffix on the leading day number ("1st", "22nd", ...).
fn ordinal_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)\b").expect("valid regex"))
}

/// Parse a site-formatted timestamp into unix milliseconds.
///
/// Yearless timestamps assume the current year at parse time. That is the
/// same approximation the site's own rendering relies on; the year is not
/// inferable from the data alone, so it is preserved rather than guessed.
pub fn parse_timestamp(input: &str) -> Result<i64> {
    parse_with_year(input, Local::now().year())
}

fn parse_with_year(input: &str, assumed_year: i32) -> Result<i64> {
    let mut text = input.trim().replace("UTC", "+0000");
    text = ordinal_pattern().replace(&text, "$1").into_owned();

    if !year_pattern().is_match(&text) {
        // Yearless layout: splice the assumed year in before the comma.
        let Some(comma) = text.find(',') else {
            return Err(AppError::date_format(input));
        };
        text.insert_str(comma, &format!(" {assumed_year}"));
    }

    DateTime::parse_from_str(&text, "%d %b %Y, %H:%M %z")
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| AppError::date_format(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn utc_marker_equals_numeric_offset() {
        let with_marker = parse_timestamp("3rd Aug 2024, 14:05 UTC").unwrap();
        let with_offset = parse_timestamp("3rd Aug 2024, 14:05 +0000").unwrap();
        assert_eq!(with_marker, with_offset);
    }

    #[test]
    fn year_bearing_layout() {
        let millis = parse_timestamp("21st Dec 2023, 9:07 +0000").unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 12, 21, 9, 7, 0).unwrap();
        assert_eq!(millis, expected.timestamp_millis());
    }

    #[test]
    fn yearless_layout_assumes_given_year() {
        let millis = parse_with_year("1st Jan, 0:30 +0000", 2024).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(millis, expected.timestamp_millis());
    }

    #[test]
    fn yearless_layout_uses_current_year() {
        let via_public = parse_timestamp("2nd Feb, 1:00 +0000").unwrap();
        let via_explicit = parse_with_year("2nd Feb, 1:00 +0000", Local::now().year()).unwrap();
        assert_eq!(via_public, via_explicit);
    }

    #[test]
    fn layouts_agree_when_year_matches() {
        let yearless = parse_with_year("2nd Feb, 1:00 +0000", 2024).unwrap();
        let with_year = parse_timestamp("2nd Feb 2024, 1:00 +0000").unwrap();
        assert_eq!(yearless, with_year);
    }

    #[test]
    fn non_utc_offset_is_honored() {
        let jst = parse_timestamp("5th Mar 2024, 9:00 +0900").unwrap();
        let utc = parse_timestamp("5th Mar 2024, 0:00 +0000").unwrap();
        assert_eq!(jst, utc);
    }

    #[test]
    fn garbage_is_a_date_format_error() {
        let err = parse_timestamp("not a timestamp").unwrap_err();
        assert!(matches!(err, AppError::DateFormat { .. }));
    }

    #[test]
    fn all_ordinal_suffixes_accepted() {
        for input in [
            "1st Jun 2024, 12:00 +0000",
            "2nd Jun 2024, 12:00 +0000",
            "3rd Jun 2024, 12:00 +0000",
            "4th Jun 2024, 12:00 +0000",
            "21st Jun 2024, 12:00 +0000",
        ] {
            assert!(parse_timestamp(input).is_ok(), "failed on {input}");
        }
    }
}
