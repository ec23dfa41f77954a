//! # Date Helper
//!
//! The injected date utility the timezone service composes: classification
//! of "empty" date values and a generic, format-guessing string parser used
//! as the fallback when locale-aware parsing declines an input.
//!
//! The parser stays zone-agnostic on purpose: it reports *what* it parsed
//! ([`ParsedStamp`]) and leaves the zone interpretation of naive values to
//! the caller, which knows the resolved timezone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Outcome of a flexible parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedStamp {
    /// The text carried its own UTC offset; the instant is fully determined.
    Zoned(DateTime<FixedOffset>),
    /// Date and time without an offset; wall clock in a zone of the
    /// caller's choosing.
    Naive(NaiveDateTime),
    /// A bare date; midnight in a zone of the caller's choosing.
    Day(NaiveDate),
}

/// Offset-bearing formats, tried first.
const ZONED_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M:%S%z"];

/// Naive date-time formats, ISO first, then slashed US forms (two-digit
/// years before four-digit so `24` maps to 2024 instead of year 24), then
/// dotted European forms. The `%H:%M%p` entries accept the `0:00am` shape
/// that short-date inputs gain when a time component is appended.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M%p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M%p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%d.%m.%y %H:%M%p",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M%p",
    "%d.%m.%Y %H:%M",
];

/// Bare-date formats, tried last.
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y", "%m/%d/%Y", "%d.%m.%Y"];

/// Date-value classification and generic parsing.
#[derive(Debug, Clone, Default)]
pub struct DateTimeHelper;

impl DateTimeHelper {
    /// Creates the helper.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when the value carries no date at all: absent, empty,
    /// or made up solely of zeros and date punctuation, like the
    /// `0000-00-00 00:00:00` placeholder legacy data stores hand out.
    pub fn is_empty_date(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return true;
        };
        value.chars().all(|c| matches!(c, ' ' | '0' | ':' | '-'))
    }

    /// Parses a date string against a fixed list of common formats,
    /// offset-bearing forms first. Returns `None` when nothing matches.
    pub fn parse_flexible(&self, text: &str) -> Option<ParsedStamp> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(ParsedStamp::Zoned(zoned));
        }
        for format in ZONED_FORMATS {
            if let Ok(zoned) = DateTime::parse_from_str(trimmed, format) {
                return Some(ParsedStamp::Zoned(zoned));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(ParsedStamp::Naive(naive));
            }
        }
        for format in DAY_FORMATS {
            if let Ok(day) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(ParsedStamp::Day(day));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> DateTimeHelper {
        DateTimeHelper::new()
    }

    #[test]
    fn absent_and_zeroed_values_are_empty() {
        assert!(helper().is_empty_date(None));
        assert!(helper().is_empty_date(Some("")));
        assert!(helper().is_empty_date(Some("0000-00-00")));
        assert!(helper().is_empty_date(Some("0000-00-00 00:00:00")));
    }

    #[test]
    fn real_dates_are_not_empty() {
        assert!(!helper().is_empty_date(Some("2024-01-01")));
        assert!(!helper().is_empty_date(Some("2024-01-01 00:00:00")));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let stamp = helper().parse_flexible("2024-03-15T10:30:00+09:00").unwrap();
        match stamp {
            ParsedStamp::Zoned(zoned) => {
                assert_eq!(zoned.timestamp(), 1710466200);
            }
            other => panic!("expected a zoned stamp, got {other:?}"),
        }
    }

    #[test]
    fn parses_iso_naive_date_time() {
        let stamp = helper().parse_flexible("2024-03-15 10:30:00").unwrap();
        assert_eq!(
            stamp,
            ParsedStamp::Naive(
                NaiveDate::from_ymd_opt(2024, 3, 15)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn parses_us_slash_form_with_appended_midnight() {
        let stamp = helper().parse_flexible("3/15/2024 0:00am").unwrap();
        assert_eq!(
            stamp,
            ParsedStamp::Naive(
                NaiveDate::from_ymd_opt(2024, 3, 15)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn two_digit_years_land_in_the_current_century() {
        let stamp = helper().parse_flexible("1/15/24 0:00am").unwrap();
        assert_eq!(
            stamp,
            ParsedStamp::Naive(
                NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn parses_bare_dates_as_days() {
        let stamp = helper().parse_flexible("2024-03-15").unwrap();
        assert_eq!(
            stamp,
            ParsedStamp::Day(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        );
    }

    #[test]
    fn declines_garbage() {
        assert_eq!(helper().parse_flexible("soon"), None);
        assert_eq!(helper().parse_flexible(""), None);
    }
}
