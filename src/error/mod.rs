//! # Error Types
//!
//! Typed errors surfaced by the timezone service and its supporting modules.
//!
//! # Design
//! - Every failure is synchronous and carries enough context to act on:
//!   the expected timezone, the offending input, or the bad identifier.
//! - Collaborator ports (scope resolution) report through [`anyhow::Error`]
//!   and are wrapped transparently, so adapter authors are free to use
//!   whatever error source fits their backend.
//! - No retries happen anywhere in this crate; callers decide.

use thiserror::Error;

/// Errors produced while normalizing, comparing, or formatting dates.
#[derive(Debug, Error)]
pub enum TimezoneError {
    /// A pre-zoned moment was handed to a config-time conversion but its
    /// zone does not match the configured timezone. The caller must
    /// pre-normalize; no implicit reinterpretation happens.
    #[error("the moment's timezone needs to be the same as the \"{expected}\" timezone in config")]
    InvalidTimezone {
        /// The configured timezone identifier the moment was expected to carry.
        expected: String,
    },

    /// Locale-aware parsing and the generic fallback both failed.
    #[error("unable to parse date value {input:?}")]
    Parse {
        /// The original input, echoed for diagnostics.
        input: String,
    },

    /// The configuration store returned an identifier that cannot name a
    /// timezone (empty string, unknown IANA name, malformed offset).
    #[error("invalid configured timezone identifier {identifier:?}")]
    Configuration {
        /// The identifier as returned by the configuration store.
        identifier: String,
    },

    /// A scope resolver adapter failed to resolve the given scope.
    #[error(transparent)]
    Scope(#[from] anyhow::Error),
}

impl TimezoneError {
    /// Shorthand for a [`TimezoneError::Parse`] carrying the offending input.
    pub fn parse(input: impl Into<String>) -> Self {
        TimezoneError::Parse {
            input: input.into(),
        }
    }

    /// Shorthand for a [`TimezoneError::Configuration`] carrying the bad
    /// identifier.
    pub fn configuration(identifier: impl Into<String>) -> Self {
        TimezoneError::Configuration {
            identifier: identifier.into(),
        }
    }
}
