//! # Locale-Aware Formatting
//!
//! Pattern derivation and rendering for dates and times.
//!
//! This module provides:
//! - [`FormatStyle`] — pattern verbosity, selectable independently for the
//!   date and time halves of an output.
//! - [`patterns`] — locale-keyed CLDR pattern tables, the short-year
//!   rewrite, and conversion from CLDR tokens to chrono format specifiers.
//! - [`LocalizedFormatter`] — renders a [`crate::zone::Moment`] using a
//!   locale, a pair of styles (or an explicit pattern), and a zone; also
//!   parses strings produced from numeric patterns.
//!
//! Localized month, weekday, and meridiem names come from chrono's
//! `unstable-locales` data; pattern selection is owned here.

pub mod formatter;
pub mod patterns;

pub use formatter::LocalizedFormatter;

use serde::{Deserialize, Serialize};

/// Verbosity of a derived date or time pattern.
///
/// The absent case ("no time half at all") is expressed as
/// `Option<FormatStyle>::None` by the callers that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Weekday and full names, e.g. `Friday, March 15, 2024`.
    Full,
    /// Full names without the weekday, e.g. `March 15, 2024`.
    Long,
    /// Abbreviated names, e.g. `Mar 15, 2024`.
    Medium,
    /// All-numeric, e.g. `3/15/24`.
    #[default]
    Short,
}

impl FormatStyle {
    /// Index into the per-locale pattern tables.
    pub(crate) fn index(self) -> usize {
        match self {
            FormatStyle::Full => 0,
            FormatStyle::Long => 1,
            FormatStyle::Medium => 2,
            FormatStyle::Short => 3,
        }
    }
}
