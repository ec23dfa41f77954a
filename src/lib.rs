//! # scopetz
//!
//! Scope-aware timezone normalization and locale formatting for
//! multi-tenant applications.
//!
//! Each scope (site/store) carries its own configured timezone; this crate
//! translates between that "configuration timezone" and UTC, and renders
//! dates and times with locale-specific patterns. It provides:
//! - Resolution of the effective timezone per scope through an injected
//!   configuration store (`config`)
//! - Normalization of heterogeneous date inputs into zone-carrying moments
//!   (`service`, `zone`)
//! - Day-interval checks in scope-local time and round-trip-safe conversion
//!   of configuration-timezone values to UTC (`service`)
//! - Locale-keyed pattern derivation and rendering (`format`, `locale`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
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
//! let utc = service
//!     .convert_config_time_to_utc("2024-01-15 12:00:00", None, None)
//!     .unwrap();
//! assert_eq!(utc, "2024-01-15 18:00:00");
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod datetime;
pub mod error;
pub mod format;
pub mod locale;
pub mod scope;
pub mod service;
pub mod zone;

pub use error::TimezoneError;
pub use format::FormatStyle;
pub use service::{DateInput, FormatOptions, TimezoneService};
pub use zone::{Moment, Zone};
