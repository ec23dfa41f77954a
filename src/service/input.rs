//! # Service Inputs
//!
//! The heterogeneous values callers hand to the timezone service, captured
//! once at the API boundary as a tagged union so the operations dispatch
//! with exhaustive case analysis instead of scattered shape probing.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

use crate::format::FormatStyle;
use crate::zone::{Moment, Zone};

/// A date value in one of the shapes the service accepts.
///
/// Classification happens in the `From` conversions: an all-digit string is
/// a Unix timestamp, an empty string is no input at all, and foreign
/// fixed-offset values keep their identity as [`DateInput::Offset`] (they
/// carry an offset but no zone rules, and some operations treat them
/// differently from a first-class [`Moment`]).
#[derive(Debug, Clone)]
pub enum DateInput<'a> {
    /// No input; operations substitute the current instant.
    Empty,
    /// A zone-carrying moment produced by this crate.
    Zoned(Moment),
    /// A foreign fixed-offset value, e.g. out of an RFC 3339 parser.
    Offset(DateTime<FixedOffset>),
    /// Unix epoch seconds.
    Timestamp(i64),
    /// A date string still to be parsed.
    Text(&'a str),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return DateInput::Empty;
        }
        if let Ok(secs) = trimmed.parse::<i64>() {
            return DateInput::Timestamp(secs);
        }
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput<'_> {
    fn from(secs: i64) -> Self {
        DateInput::Timestamp(secs)
    }
}

impl From<Moment> for DateInput<'_> {
    fn from(moment: Moment) -> Self {
        DateInput::Zoned(moment)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::Zoned(value.with_timezone(&Zone::UTC))
    }
}

impl From<DateTime<Tz>> for DateInput<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        let zone = Zone::Named(value.timezone());
        DateInput::Zoned(value.with_timezone(&zone))
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DateInput::Offset(value)
    }
}

impl<'a, T> From<Option<T>> for DateInput<'a>
where
    T: Into<DateInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DateInput::Empty)
    }
}

/// Options for [`crate::service::TimezoneService::format_date_time`].
///
/// The defaults reproduce the most common rendering: short date, short
/// time, resolver-supplied locale, zone taken from the value itself (with
/// the UTC substitution rule), style-derived pattern.
#[derive(Debug, Clone)]
pub struct FormatOptions<'a> {
    /// Verbosity of the date half.
    pub date_style: FormatStyle,
    /// Verbosity of the time half; `None` renders the date only.
    pub time_style: Option<FormatStyle>,
    /// Overrides the resolver-supplied locale.
    pub locale: Option<&'a str>,
    /// Renders in this zone instead of the value's own (or substituted) one.
    pub timezone: Option<Zone>,
    /// Explicit CLDR pattern; overrides style-based derivation entirely.
    pub pattern: Option<&'a str>,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            date_style: FormatStyle::Short,
            time_style: Some(FormatStyle::Short),
            locale: None,
            timezone: None,
            pattern: None,
        }
    }
}

impl FormatOptions<'_> {
    /// Options for a date-and-time rendering at one style.
    pub fn styled(date_style: FormatStyle, time_style: Option<FormatStyle>) -> Self {
        Self {
            date_style,
            time_style,
            ..Self::default()
        }
    }
}
