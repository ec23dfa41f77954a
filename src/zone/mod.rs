//! # Zone and Moment
//!
//! The moment representation used across the crate: an instant paired with
//! the timezone it should be read in.
//!
//! A configured timezone identifier is either an IANA name
//! (`"America/Chicago"`) or a fixed offset (`"+09:00"`). [`Zone`] covers both
//! behind one [`chrono::TimeZone`] implementation, so a [`Moment`] is just a
//! [`DateTime<Zone>`] and all of chrono's arithmetic and formatting applies.
//!
//! # Example
//! ```
//! use scopetz::zone::Zone;
//!
//! let zone: Zone = "Asia/Tokyo".parse().unwrap();
//! assert_eq!(zone.name(), "Asia/Tokyo");
//! assert!(!zone.is_utc());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::{Tz, TzOffset};

use crate::error::TimezoneError;

/// An instant in time carrying the zone it should be displayed in.
///
/// Re-expressing a moment in another zone (`with_timezone`) never changes the
/// underlying instant, only the wall-clock fields.
pub type Moment = DateTime<Zone>;

/// A timezone as configured per scope: a named IANA zone or a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// A named IANA zone, DST rules included.
    Named(Tz),
    /// A fixed UTC offset with no DST behavior.
    Fixed(FixedOffset),
}

impl Zone {
    /// The UTC zone.
    pub const UTC: Zone = Zone::Named(Tz::UTC);

    /// Returns the identifier of this zone: the IANA name, or the offset in
    /// `±HH:MM` form.
    pub fn name(&self) -> String {
        match self {
            Zone::Named(tz) => tz.name().to_string(),
            Zone::Fixed(offset) => offset.to_string(),
        }
    }

    /// Returns `true` for the UTC zone and for the literal zero offset.
    ///
    /// Values in either form are treated as timezone-naive by the formatting
    /// layer and redisplayed in the configured business timezone.
    pub fn is_utc(&self) -> bool {
        match self {
            Zone::Named(tz) => tz.name() == "UTC",
            Zone::Fixed(offset) => offset.local_minus_utc() == 0,
        }
    }

    /// The current instant, expressed in this zone.
    pub fn now(&self) -> Moment {
        Utc::now().with_timezone(self)
    }

    /// Builds a moment at the given Unix timestamp (seconds), with
    /// wall-clock fields computed against this zone.
    pub fn at_timestamp(&self, secs: i64) -> Result<Moment, TimezoneError> {
        self.timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| TimezoneError::parse(secs.to_string()))
    }

    /// Resolves naive wall-clock fields to a moment in this zone.
    ///
    /// Ambiguous local times (DST fall-back) take the earliest offset. Local
    /// times skipped by a DST gap land on the first valid instant after the
    /// transition.
    pub fn resolve_local(&self, local: NaiveDateTime) -> Result<Moment, TimezoneError> {
        match self.from_local_datetime(&local) {
            LocalResult::Single(moment) => Ok(moment),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => {
                let shifted = local + Duration::hours(1);
                self.from_local_datetime(&shifted)
                    .earliest()
                    .ok_or_else(|| TimezoneError::parse(local.to_string()))
            }
        }
    }
}

impl FromStr for Zone {
    type Err = TimezoneError;

    /// Parses a configured identifier: IANA name first, `±HH:MM` offset
    /// second. Anything else, including the empty string a configuration
    /// store may hand back, is a configuration error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimezoneError::configuration(s));
        }
        if let Ok(tz) = trimmed.parse::<Tz>() {
            return Ok(Zone::Named(tz));
        }
        if let Ok(offset) = trimmed.parse::<FixedOffset>() {
            return Ok(Zone::Fixed(offset));
        }
        Err(TimezoneError::configuration(s))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => write!(f, "{}", tz.name()),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Offset counterpart of [`Zone`], required by the [`TimeZone`] contract.
#[derive(Clone, Copy, Debug)]
pub enum ZoneOffset {
    Named(TzOffset),
    Fixed(FixedOffset),
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            ZoneOffset::Named(offset) => offset.fix(),
            ZoneOffset::Fixed(offset) => offset.fix(),
        }
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneOffset::Named(offset) => write!(f, "{offset}"),
            ZoneOffset::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl TimeZone for Zone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> Self {
        match offset {
            ZoneOffset::Named(o) => Zone::Named(Tz::from_offset(o)),
            ZoneOffset::Fixed(o) => Zone::Fixed(*o),
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Named(tz) => tz.offset_from_local_date(local).map(ZoneOffset::Named),
            Zone::Fixed(o) => o.offset_from_local_date(local).map(ZoneOffset::Fixed),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            Zone::Named(tz) => tz.offset_from_local_datetime(local).map(ZoneOffset::Named),
            Zone::Fixed(o) => o.offset_from_local_datetime(local).map(ZoneOffset::Fixed),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            Zone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_date(utc)),
            Zone::Fixed(o) => ZoneOffset::Fixed(o.offset_from_utc_date(utc)),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            Zone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_datetime(utc)),
            Zone::Fixed(o) => ZoneOffset::Fixed(o.offset_from_utc_datetime(utc)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_iana_names() {
        let zone: Zone = "America/Chicago".parse().unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::America::Chicago));
        assert_eq!(zone.name(), "America/Chicago");
    }

    #[test]
    fn parses_fixed_offsets() {
        let zone: Zone = "+09:00".parse().unwrap();
        assert_eq!(zone.name(), "+09:00");
        assert!(!zone.is_utc());
    }

    #[test]
    fn rejects_empty_and_garbage_identifiers() {
        for bad in ["", "   ", "Mars/Olympus", "UTC+banana"] {
            let err = bad.parse::<Zone>().unwrap_err();
            assert!(
                matches!(err, TimezoneError::Configuration { .. }),
                "expected configuration error for {bad:?}"
            );
        }
    }

    #[test]
    fn utc_detection_covers_name_and_zero_offset() {
        assert!(Zone::UTC.is_utc());
        assert!("+00:00".parse::<Zone>().unwrap().is_utc());
        assert!(!"Asia/Tokyo".parse::<Zone>().unwrap().is_utc());
        // An aliased UTC name is a distinct identifier, not the literal one.
        assert!(!"Etc/GMT".parse::<Zone>().unwrap().is_utc());
    }

    #[test]
    fn timestamp_wall_clock_follows_the_zone() {
        let zone: Zone = "Asia/Tokyo".parse().unwrap();
        // 2025-02-01T00:00:00Z is 09:00 the same day in Tokyo.
        let moment = zone.at_timestamp(1738368000).unwrap();
        assert_eq!(moment.naive_local().to_string(), "2025-02-01 09:00:00");
        assert_eq!(moment.timestamp(), 1738368000);
    }

    #[test]
    fn resolve_local_passes_unambiguous_times_through() {
        let zone: Zone = "America/Chicago".parse().unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let moment = zone.resolve_local(local).unwrap();
        assert_eq!(moment.naive_local(), local);
    }

    #[test]
    fn resolve_local_takes_earliest_offset_when_ambiguous() {
        let zone: Zone = "America/Chicago".parse().unwrap();
        // 01:30 occurs twice on 2024-11-03; the earliest reading is CDT.
        let local = NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        let moment = zone.resolve_local(local).unwrap();
        assert_eq!(moment.offset().fix().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn resolve_local_skips_forward_over_dst_gaps() {
        let zone: Zone = "America/Chicago".parse().unwrap();
        // 02:30 does not exist on 2024-03-10 (clocks jump 02:00 -> 03:00).
        let local = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();

        let moment = zone.resolve_local(local).unwrap();
        assert_eq!(moment.naive_local().hour(), 3);
        assert_eq!(moment.offset().fix().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn with_timezone_preserves_the_instant() {
        let tokyo: Zone = "Asia/Tokyo".parse().unwrap();
        let chicago: Zone = "America/Chicago".parse().unwrap();

        let moment = tokyo.at_timestamp(1738368000).unwrap();
        let moved = moment.with_timezone(&chicago);

        assert_eq!(moved.timestamp(), moment.timestamp());
        assert_eq!(moved.timezone().name(), "America/Chicago");
    }
}
