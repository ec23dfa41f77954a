//! # LocaleResolver Port
//!
//! A port that provides the **active locale** for the application.
//!
//! # Purpose
//! This trait abstracts locale selection so that:
//!
//! - Formatting logic does **not** depend on process state or request state
//! - Implementations can be swapped (fixed, environment, per-request)
//! - Tests can pin a locale deterministically
//!
//! # Design Notes
//! - An absent locale is a valid answer; callers fall back to their default
//!   pattern tables.
//! - Tag shape is lenient: `en-US`, `en_US`, and bare `en` are all accepted
//!   downstream.

/// Returns the active locale tag, if one is resolvable.
pub trait LocaleResolver: Send + Sync {
    /// The active locale tag (e.g. `"en-US"`), or `None` when no locale is
    /// configured.
    fn locale(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLocale;

    impl LocaleResolver for NoLocale {
        fn locale(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn absent_locale_is_a_valid_resolution() {
        let resolver: Box<dyn LocaleResolver> = Box::new(NoLocale);
        assert_eq!(resolver.locale(), None);
    }
}
