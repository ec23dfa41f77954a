//! # Locale Resolution Port
//!
//! Supplies the active locale tag for formatting-pattern selection. The
//! timezone service never decides the locale itself; it asks the injected
//! [`LocaleResolver`] on every call, so per-request locale switching is the
//! resolver's concern.

pub mod env_locale;
pub mod fixed_locale;
pub mod resolver;

pub use env_locale::EnvLocaleResolver;
pub use fixed_locale::FixedLocaleResolver;
pub use resolver::LocaleResolver;
