//! # Timezone Service
//!
//! The core of the crate: resolves the effective timezone and locale per
//! call from the injected collaborator ports, and performs timezone-aware
//! construction, comparison, formatting, and UTC conversion of moments.
//!
//! # Design
//! - The service holds no mutable state; every operation is a pure function
//!   of its inputs and the injected ports, so one instance can be shared
//!   across threads (`Arc<TimezoneService>`) freely.
//! - No operation reads or writes process-global timezone state. "Now in
//!   the scope timezone" is computed by converting the current instant into
//!   the target zone directly.
//! - Heterogeneous date arguments are classified once into [`DateInput`] at
//!   the boundary and dispatched exhaustively.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use scopetz::config::{DEFAULT_TIMEZONE_PATH, MemoryConfigStore};
//! use scopetz::locale::FixedLocaleResolver;
//! use scopetz::scope::StaticScopeResolver;
//! use scopetz::service::TimezoneService;
//!
//! let store = MemoryConfigStore::new()
//!     .set(DEFAULT_TIMEZONE_PATH, "store", None, "America/Chicago");
//! let service = TimezoneService::new(
//!     Arc::new(store),
//!     Arc::new(FixedLocaleResolver::new("en-US")),
//!     Arc::new(StaticScopeResolver::new("main")),
//! );
//!
//! assert_eq!(service.config_timezone(None, None), "America/Chicago");
//! assert_eq!(service.date_format_with_long_year(), "M/d/Y");
//! ```

pub mod input;

pub use input::{DateInput, FormatOptions};

use std::sync::Arc;
use std::sync::LazyLock;

use chrono::{NaiveTime, TimeZone, Utc};
use regex::Regex;
use tracing::{debug, warn};

use crate::config::{ConfigStore, DEFAULT_TIMEZONE_PATH};
use crate::datetime::{DateTimeHelper, ParsedStamp};
use crate::error::TimezoneError;
use crate::format::{FormatStyle, LocalizedFormatter, patterns};
use crate::locale::LocaleResolver;
use crate::scope::{SCOPE_TYPE_STORE, ScopeRef, ScopeResolver};
use crate::zone::{Moment, Zone};

/// One day in seconds, used to stretch a date-only upper bound over its
/// whole day.
const DAY_SECONDS: i64 = 86_400;

/// A time-of-day token (`3:45`, `0:00`): one digit, a colon, two digits.
static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d:\d{2}").expect("time-token pattern is valid"));

/// Scope-aware timezone normalization and formatting.
///
/// Composes four collaborators: a [`ConfigStore`] for the per-scope
/// timezone setting, a [`LocaleResolver`] for the active locale, a
/// [`ScopeResolver`] for raw scope identifiers, and a [`DateTimeHelper`]
/// for emptiness classification and generic parsing.
pub struct TimezoneService {
    config: Arc<dyn ConfigStore>,
    locale_resolver: Arc<dyn LocaleResolver>,
    scope_resolver: Arc<dyn ScopeResolver>,
    date_time: DateTimeHelper,
    scope_type: String,
    timezone_path: String,
}

impl TimezoneService {
    /// Creates a service over the given ports, with the `store` scope type
    /// and the default timezone configuration path.
    pub fn new(
        config: Arc<dyn ConfigStore>,
        locale_resolver: Arc<dyn LocaleResolver>,
        scope_resolver: Arc<dyn ScopeResolver>,
    ) -> Self {
        Self {
            config,
            locale_resolver,
            scope_resolver,
            date_time: DateTimeHelper::new(),
            scope_type: SCOPE_TYPE_STORE.to_string(),
            timezone_path: DEFAULT_TIMEZONE_PATH.to_string(),
        }
    }

    /// Overrides the scope type used for configuration lookups.
    pub fn with_scope_type(mut self, scope_type: impl Into<String>) -> Self {
        self.scope_type = scope_type.into();
        self
    }

    /// Overrides the configuration path of the timezone setting.
    pub fn with_timezone_path(mut self, path: impl Into<String>) -> Self {
        self.timezone_path = path.into();
        self
    }

    /// Replaces the date helper.
    pub fn with_date_helper(mut self, helper: DateTimeHelper) -> Self {
        self.date_time = helper;
        self
    }

    /// The configuration path the timezone setting is read from.
    pub fn default_timezone_path(&self) -> &str {
        &self.timezone_path
    }

    /// The canonical storage timezone.
    pub fn default_timezone(&self) -> &'static str {
        "UTC"
    }

    /// Returns the configured timezone identifier for the scope, falling
    /// back to the service's own scope type when none is given.
    ///
    /// The identifier is propagated exactly as the store returns it; a
    /// missing setting comes back as an empty string and is only rejected
    /// when something downstream tries to build a zone from it.
    pub fn config_timezone(&self, scope_type: Option<&str>, scope_code: Option<&str>) -> String {
        self.config
            .value(
                &self.timezone_path,
                scope_type.unwrap_or(&self.scope_type),
                scope_code,
            )
            .unwrap_or_default()
    }

    /// The date pattern for the active locale at the given style.
    pub fn date_format(&self, style: FormatStyle) -> String {
        patterns::date_pattern(self.locale().as_deref(), style)
    }

    /// The short date pattern with a four-digit year: an exactly-two-`y`
    /// run in the short pattern is rewritten to `Y`.
    pub fn date_format_with_long_year(&self) -> String {
        patterns::long_year(&self.date_format(FormatStyle::Short))
    }

    /// The time pattern for the active locale at the given style.
    pub fn time_format(&self, style: FormatStyle) -> String {
        patterns::time_pattern(self.locale().as_deref(), style)
    }

    /// Date and time patterns for the style, joined by a single space. No
    /// grammatical composition is attempted.
    pub fn date_time_format(&self, style: FormatStyle) -> String {
        format!("{} {}", self.date_format(style), self.time_format(style))
    }

    /// Normalizes a heterogeneous input into a moment in the resolved
    /// timezone: the configured scope timezone when `use_timezone` is set,
    /// the process default otherwise.
    ///
    /// Dispatch by input shape:
    /// - [`DateInput::Empty`] — the current instant.
    /// - [`DateInput::Zoned`] — the same instant re-expressed in the
    ///   resolved zone.
    /// - [`DateInput::Offset`] — copied as-is, keeping its own offset. The
    ///   resolved timezone is deliberately not applied to foreign
    ///   fixed-offset values; callers relying on this get a faithful copy.
    /// - [`DateInput::Text`] — parsed with a locale-aware SHORT formatter
    ///   in the resolved zone. When `include_time` is set and the text has
    ///   no time token, `" 0:00am"` is appended first so the parser has a
    ///   time component to consume. If the locale-aware parse declines,
    ///   the generic parser supplies an epoch instead.
    /// - [`DateInput::Timestamp`] — that instant in the resolved zone.
    pub fn date<'a>(
        &self,
        input: impl Into<DateInput<'a>>,
        locale: Option<&str>,
        use_timezone: bool,
        include_time: bool,
    ) -> Result<Moment, TimezoneError> {
        let zone = if use_timezone {
            self.config_zone()?
        } else {
            self.process_default_zone()
        };
        let locale = locale.map(str::to_string).or_else(|| self.locale());

        match input.into() {
            DateInput::Empty => Ok(zone.now()),
            DateInput::Zoned(moment) => Ok(moment.with_timezone(&zone)),
            DateInput::Offset(value) => Ok(value.with_timezone(&Zone::Fixed(*value.offset()))),
            DateInput::Timestamp(secs) => zone.at_timestamp(secs),
            DateInput::Text(text) => {
                let prepared = if include_time && !TIME_TOKEN.is_match(text) {
                    format!("{text} 0:00am")
                } else {
                    text.to_string()
                };
                let formatter = LocalizedFormatter::new(
                    locale.as_deref(),
                    Some(FormatStyle::Short),
                    include_time.then_some(FormatStyle::Short),
                    zone,
                );
                match formatter.parse(&prepared) {
                    Ok(moment) => Ok(moment),
                    Err(_) => {
                        debug!(input = text, "locale-aware parse declined, using the generic parser");
                        let secs = self.fallback_epoch(&prepared, &zone)?;
                        zone.at_timestamp(secs)
                    }
                }
            }
        }
    }

    /// Builds a moment in the timezone configured for `scope`, bypassing
    /// the `use_timezone` switch of [`TimezoneService::date`].
    ///
    /// Numeric input is Unix epoch seconds; strings are local wall clock in
    /// the scope timezone; an absent date means "now" in that timezone,
    /// consistent with [`TimezoneService::date`]'s empty case. Unless
    /// `include_time` is set, the result is truncated to 00:00:00 in the
    /// scope timezone, giving the midnight anchor day-based business rules
    /// work from.
    pub fn scope_date<'a>(
        &self,
        scope: Option<&str>,
        input: impl Into<DateInput<'a>>,
        include_time: bool,
    ) -> Result<Moment, TimezoneError> {
        let zone = self.scope_zone(scope)?;
        let moment = match input.into() {
            DateInput::Empty => zone.now(),
            DateInput::Zoned(moment) => moment.with_timezone(&zone),
            DateInput::Offset(value) => value.with_timezone(&zone),
            DateInput::Timestamp(secs) => zone.at_timestamp(secs)?,
            DateInput::Text(text) => match self.date_time.parse_flexible(text) {
                Some(ParsedStamp::Zoned(value)) => value.with_timezone(&zone),
                Some(ParsedStamp::Naive(naive)) => zone.resolve_local(naive)?,
                Some(ParsedStamp::Day(day)) => zone.resolve_local(day.and_time(NaiveTime::MIN))?,
                None => return Err(TimezoneError::parse(text)),
            },
        };
        if include_time {
            Ok(moment)
        } else {
            zone.resolve_local(moment.date_naive().and_time(NaiveTime::MIN))
        }
    }

    /// Computes "now" as wall clock in the scope's configured timezone,
    /// returned as epoch seconds against a fixed UTC reading.
    ///
    /// The same reading is applied to interval bounds in
    /// [`TimezoneService::is_scope_date_in_interval`], so the two sides
    /// always compare in the same frame. No process-global timezone state
    /// is involved.
    pub fn scope_timestamp(&self, scope: Option<&str>) -> Result<i64, TimezoneError> {
        let zone = self.scope_zone(scope)?;
        Ok(zone.now().naive_local().and_utc().timestamp())
    }

    /// Checks whether the scope's current date, in the scope timezone,
    /// falls within `[date_from, date_to]`.
    ///
    /// A present `date_to` is treated as an inclusive full day: its parsed
    /// epoch is advanced by exactly one day, so a date-only value covers
    /// through 23:59:59. Bounds that are empty (per the date helper) or
    /// unparseable are open. Raw scope codes are resolved through the
    /// scope resolver first.
    pub fn is_scope_date_in_interval<'a>(
        &self,
        scope: impl Into<ScopeRef<'a>>,
        date_from: Option<&str>,
        date_to: Option<&str>,
    ) -> Result<bool, TimezoneError> {
        let code = match scope.into() {
            ScopeRef::Resolved(scope) => scope.code().to_string(),
            ScopeRef::Code(code) => self.scope_resolver.scope(Some(code))?.code().to_string(),
        };
        let now = self.scope_timestamp(Some(&code))?;

        let from = self.day_bound(date_from);
        let to = self.day_bound(date_to).map(|secs| secs + DAY_SECONDS);

        Ok(from.is_none_or(|from| now >= from) && to.is_none_or(|to| now < to))
    }

    /// Formats a date using the current locale and the UTC substitution
    /// rule of [`TimezoneService::format_date_time`]. The time half is
    /// rendered at the same style only when `show_time` is set.
    pub fn format_date<'a>(
        &self,
        input: impl Into<DateInput<'a>>,
        style: FormatStyle,
        show_time: bool,
    ) -> Result<String, TimezoneError> {
        self.format_date_time(input, FormatOptions::styled(style, show_time.then_some(style)))
    }

    /// Formats a date-time with explicit styles, and optionally an explicit
    /// locale, timezone, or CLDR pattern.
    ///
    /// When no timezone is given, the value's own zone is used, unless that
    /// zone is UTC or the literal zero offset: such values are assumed to
    /// actually represent configuration-timezone data and are redisplayed
    /// in the configured business timezone.
    pub fn format_date_time<'a>(
        &self,
        input: impl Into<DateInput<'a>>,
        options: FormatOptions<'_>,
    ) -> Result<String, TimezoneError> {
        let moment = self.coerce(input.into())?;
        let zone = match options.timezone {
            Some(zone) => zone,
            None if moment.timezone().is_utc() => {
                let zone = self.config_zone()?;
                debug!(zone = %zone, "redisplaying a UTC value in the configured timezone");
                zone
            }
            None => moment.timezone(),
        };

        let locale = options.locale.map(str::to_string).or_else(|| self.locale());
        let mut formatter = LocalizedFormatter::new(
            locale.as_deref(),
            Some(options.date_style),
            options.time_style,
            zone,
        );
        if let Some(pattern) = options.pattern {
            formatter = formatter.with_pattern(pattern);
        }
        Ok(formatter.format(&moment.with_timezone(&zone)))
    }

    /// Converts a value expressed in the configuration timezone to UTC,
    /// rendered with the given strftime `format` (default
    /// `%Y-%m-%d %H:%M:%S`).
    ///
    /// A pre-zoned [`Moment`] must already carry the configuration
    /// timezone; anything else is an [`TimezoneError::InvalidTimezone`] and
    /// nothing is converted. Foreign fixed-offset values have their wall
    /// clock reinterpreted in the configuration timezone. Strings parse
    /// with a locale-aware MEDIUM formatter in the configuration timezone;
    /// with no resolvable locale the fixed `Y-M-dd HH:mm:ss` pattern
    /// applies, and the generic parser remains the last resort. An
    /// explicit CLDR `pattern` overrides the style-derived one.
    pub fn convert_config_time_to_utc<'a>(
        &self,
        input: impl Into<DateInput<'a>>,
        format: Option<&str>,
        pattern: Option<&str>,
    ) -> Result<String, TimezoneError> {
        let config_zone = self.config_zone()?;

        let moment = match input.into() {
            DateInput::Zoned(moment) => {
                if moment.timezone() != config_zone {
                    return Err(TimezoneError::InvalidTimezone {
                        expected: config_zone.name(),
                    });
                }
                moment
            }
            DateInput::Offset(value) => config_zone.resolve_local(value.naive_local())?,
            DateInput::Timestamp(secs) => config_zone.at_timestamp(secs)?,
            DateInput::Empty => config_zone.now(),
            DateInput::Text(text) => {
                let locale = self.locale();
                let effective_pattern = if locale.is_none() {
                    Some("Y-M-dd HH:mm:ss")
                } else {
                    pattern
                };
                let mut formatter = LocalizedFormatter::new(
                    locale.as_deref(),
                    Some(FormatStyle::Medium),
                    Some(FormatStyle::Medium),
                    config_zone,
                );
                if let Some(pattern) = effective_pattern {
                    formatter = formatter.with_pattern(pattern);
                }
                match formatter.parse(text) {
                    Ok(moment) => moment,
                    Err(_) => {
                        debug!(input = text, "locale-aware parse declined, using the generic parser");
                        let secs = self.fallback_epoch(text, &config_zone)?;
                        config_zone.at_timestamp(secs)?
                    }
                }
            }
        };

        let format = format.unwrap_or("%Y-%m-%d %H:%M:%S");
        Ok(moment.with_timezone(&Utc).format(format).to_string())
    }

    fn locale(&self) -> Option<String> {
        self.locale_resolver.locale()
    }

    /// Coerces a formatting input into a moment. Values without any zone
    /// information read as UTC, which makes them subject to the
    /// configuration-timezone substitution downstream.
    fn coerce(&self, input: DateInput<'_>) -> Result<Moment, TimezoneError> {
        match input {
            DateInput::Empty => Ok(Zone::UTC.now()),
            DateInput::Zoned(moment) => Ok(moment),
            DateInput::Offset(value) => Ok(value.with_timezone(&Zone::Fixed(*value.offset()))),
            DateInput::Timestamp(secs) => Zone::UTC.at_timestamp(secs),
            DateInput::Text(text) => match self.date_time.parse_flexible(text) {
                Some(ParsedStamp::Zoned(value)) => {
                    Ok(value.with_timezone(&Zone::Fixed(*value.offset())))
                }
                Some(ParsedStamp::Naive(naive)) => Ok(Zone::UTC.from_utc_datetime(&naive)),
                Some(ParsedStamp::Day(day)) => {
                    Ok(Zone::UTC.from_utc_datetime(&day.and_time(NaiveTime::MIN)))
                }
                None => Err(TimezoneError::parse(text)),
            },
        }
    }

    fn config_zone(&self) -> Result<Zone, TimezoneError> {
        self.config_timezone(None, None).parse()
    }

    fn scope_zone(&self, scope_code: Option<&str>) -> Result<Zone, TimezoneError> {
        self.config
            .value(&self.timezone_path, &self.scope_type, scope_code)
            .unwrap_or_default()
            .parse()
    }

    /// The process default timezone, read by name. Never mutates any
    /// global state; an undeterminable zone degrades to UTC.
    fn process_default_zone(&self) -> Zone {
        match iana_time_zone::get_timezone() {
            Ok(name) => name.parse().unwrap_or_else(|_| {
                warn!(%name, "unrecognized process timezone, using UTC");
                Zone::UTC
            }),
            Err(err) => {
                warn!(%err, "could not determine the process timezone, using UTC");
                Zone::UTC
            }
        }
    }

    /// Generic-parse fallback: the epoch of `text`, with naive wall-clock
    /// readings resolved in `zone`.
    fn fallback_epoch(&self, text: &str, zone: &Zone) -> Result<i64, TimezoneError> {
        match self.date_time.parse_flexible(text) {
            Some(ParsedStamp::Zoned(value)) => Ok(value.timestamp()),
            Some(ParsedStamp::Naive(naive)) => Ok(zone.resolve_local(naive)?.timestamp()),
            Some(ParsedStamp::Day(day)) => {
                Ok(zone.resolve_local(day.and_time(NaiveTime::MIN))?.timestamp())
            }
            None => Err(TimezoneError::parse(text)),
        }
    }

    /// An interval bound as epoch seconds in the fixed UTC reading, or
    /// `None` for an open bound.
    fn day_bound(&self, value: Option<&str>) -> Option<i64> {
        let value = value?;
        if self.date_time.is_empty_date(Some(value)) {
            return None;
        }
        match self.date_time.parse_flexible(value) {
            Some(ParsedStamp::Zoned(zoned)) => Some(zoned.timestamp()),
            Some(ParsedStamp::Naive(naive)) => Some(naive.and_utc().timestamp()),
            Some(ParsedStamp::Day(day)) => {
                Some(day.and_time(NaiveTime::MIN).and_utc().timestamp())
            }
            None => {
                debug!(value, "unparseable interval bound treated as open");
                None
            }
        }
    }
}
