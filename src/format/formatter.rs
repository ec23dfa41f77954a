//! # Localized Formatter
//!
//! Combines a locale, a date/time style pair (or an explicit pattern), and a
//! [`Zone`] into a reusable formatter for [`Moment`] values.
//!
//! Rendering is fully localized (month, weekday, and meridiem names follow
//! the locale). Parsing is strict against the derived pattern: all-numeric
//! patterns (every SHORT style in the tables) parse reliably, and English
//! name-bearing patterns parse too, but localized names in other languages
//! do not round-trip; callers are expected to fall back to generic parsing
//! when this parser declines.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimezoneError;
use crate::format::{FormatStyle, patterns};
use crate::zone::{Moment, Zone};

/// A formatter bound to one locale, one style pair, and one zone.
///
/// # Example
/// ```
/// use scopetz::format::{FormatStyle, LocalizedFormatter};
/// use scopetz::zone::Zone;
///
/// let zone: Zone = "America/Chicago".parse().unwrap();
/// let formatter = LocalizedFormatter::new(
///     Some("en-US"),
///     Some(FormatStyle::Short),
///     None,
///     zone,
/// );
/// assert_eq!(formatter.pattern(), "M/d/yy");
/// ```
#[derive(Debug, Clone)]
pub struct LocalizedFormatter {
    locale: Option<String>,
    date_style: Option<FormatStyle>,
    time_style: Option<FormatStyle>,
    zone: Zone,
    pattern: Option<String>,
}

impl LocalizedFormatter {
    /// Creates a formatter for the locale, styles, and zone.
    ///
    /// A `None` style drops that half of the pattern entirely; an absent
    /// locale selects the fallback (`en-US`) tables.
    pub fn new(
        locale: Option<&str>,
        date_style: Option<FormatStyle>,
        time_style: Option<FormatStyle>,
        zone: Zone,
    ) -> Self {
        Self {
            locale: locale.map(str::to_string),
            date_style,
            time_style,
            zone,
            pattern: None,
        }
    }

    /// Replaces style-based pattern derivation with an explicit CLDR pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// The CLDR pattern this formatter renders with: the explicit override
    /// when set, otherwise the style-derived date and time patterns joined
    /// by a single space.
    pub fn pattern(&self) -> String {
        if let Some(pattern) = &self.pattern {
            return pattern.clone();
        }
        let locale = self.locale.as_deref();
        match (self.date_style, self.time_style) {
            (Some(date), Some(time)) => format!(
                "{} {}",
                patterns::date_pattern(locale, date),
                patterns::time_pattern(locale, time)
            ),
            (Some(date), None) => patterns::date_pattern(locale, date),
            (None, Some(time)) => patterns::time_pattern(locale, time),
            (None, None) => String::new(),
        }
    }

    /// Renders the moment. Wall-clock fields are taken from the moment's own
    /// zone; re-express it first to render in another zone.
    pub fn format(&self, moment: &Moment) -> String {
        let format = patterns::to_strftime(&self.pattern());
        moment
            .format_localized(&format, patterns::chrono_locale(self.locale.as_deref()))
            .to_string()
    }

    /// Parses a string against the derived pattern, resolving the wall-clock
    /// fields in this formatter's zone.
    ///
    /// Date-only patterns yield midnight. Errors when the text does not
    /// match the pattern; the caller decides on a fallback.
    pub fn parse(&self, text: &str) -> Result<Moment, TimezoneError> {
        let format = patterns::to_strftime(&self.pattern());
        let trimmed = text.trim();

        if let Ok(local) = NaiveDateTime::parse_from_str(trimmed, &format) {
            return self.zone.resolve_local(local);
        }
        if let Ok(day) = NaiveDate::parse_from_str(trimmed, &format) {
            return self.zone.resolve_local(day.and_time(NaiveTime::MIN));
        }
        Err(TimezoneError::parse(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chicago() -> Zone {
        "America/Chicago".parse().unwrap()
    }

    fn moment(zone: &Zone, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Moment {
        let local = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap();
        zone.resolve_local(local).unwrap()
    }

    #[test]
    fn derived_pattern_joins_date_and_time_with_one_space() {
        let formatter = LocalizedFormatter::new(
            Some("en-US"),
            Some(FormatStyle::Short),
            Some(FormatStyle::Short),
            chicago(),
        );
        assert_eq!(formatter.pattern(), "M/d/yy h:mm a");
    }

    #[test]
    fn explicit_pattern_overrides_styles() {
        let formatter = LocalizedFormatter::new(
            Some("en-US"),
            Some(FormatStyle::Full),
            Some(FormatStyle::Full),
            chicago(),
        )
        .with_pattern("y-MM-dd");
        assert_eq!(formatter.pattern(), "y-MM-dd");
    }

    #[test]
    fn formats_short_us_date_time() {
        let zone = chicago();
        let formatter = LocalizedFormatter::new(
            Some("en-US"),
            Some(FormatStyle::Short),
            Some(FormatStyle::Short),
            zone,
        );

        let rendered = formatter.format(&moment(&zone, 2024, 1, 15, 12, 30));
        assert_eq!(rendered, "1/15/24 12:30 PM");
    }

    #[test]
    fn formats_localized_month_names() {
        let zone = chicago();
        let formatter =
            LocalizedFormatter::new(Some("de-DE"), Some(FormatStyle::Long), None, zone);

        let rendered = formatter.format(&moment(&zone, 2024, 1, 15, 0, 0));
        assert_eq!(rendered, "15. Januar 2024");
    }

    #[test]
    fn formats_japanese_numeric_medium_date() {
        let zone = chicago();
        let formatter =
            LocalizedFormatter::new(Some("ja-JP"), Some(FormatStyle::Medium), None, zone);

        let rendered = formatter.format(&moment(&zone, 2024, 1, 5, 0, 0));
        assert_eq!(rendered, "2024/01/05");
    }

    #[test]
    fn parses_short_us_date_to_midnight() {
        let zone = chicago();
        let formatter =
            LocalizedFormatter::new(Some("en-US"), Some(FormatStyle::Short), None, zone);

        let parsed = formatter.parse("1/15/24").unwrap();
        assert_eq!(parsed.naive_local().to_string(), "2024-01-15 00:00:00");
        assert_eq!(parsed.timezone().name(), "America/Chicago");
    }

    #[test]
    fn parses_short_us_date_time() {
        let zone = chicago();
        let formatter = LocalizedFormatter::new(
            Some("en-US"),
            Some(FormatStyle::Short),
            Some(FormatStyle::Short),
            zone,
        );

        let parsed = formatter.parse("1/15/24 3:45 PM").unwrap();
        assert_eq!(parsed.naive_local().to_string(), "2024-01-15 15:45:00");
    }

    #[test]
    fn parse_declines_non_matching_text() {
        let zone = chicago();
        let formatter = LocalizedFormatter::new(
            Some("en-US"),
            Some(FormatStyle::Short),
            Some(FormatStyle::Short),
            zone,
        );

        let err = formatter.parse("January the fifteenth").unwrap_err();
        assert!(matches!(err, TimezoneError::Parse { .. }));
    }
}
