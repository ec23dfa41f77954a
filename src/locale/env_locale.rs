//! # Environment Locale Resolver
//!
//! A [`LocaleResolver`] that reads the conventional POSIX locale variables:
//! `LC_ALL` first, then `LANG`. Encoding suffixes (`.UTF-8`) and modifiers
//! (`@euro`) are stripped; the `C` and `POSIX` locales resolve to no locale
//! at all.

use crate::locale::resolver::LocaleResolver;

/// Resolves the locale from `LC_ALL` / `LANG`.
#[derive(Debug, Clone, Default)]
pub struct EnvLocaleResolver;

impl EnvLocaleResolver {
    /// Creates a resolver over the current process environment.
    pub fn new() -> Self {
        Self
    }
}

/// Normalizes a raw POSIX locale value to a plain tag, or `None` for the
/// locale-less `C`/`POSIX` settings.
fn normalize(raw: &str) -> Option<String> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag)
}

impl LocaleResolver for EnvLocaleResolver {
    fn locale(&self) -> Option<String> {
        ["LC_ALL", "LANG"]
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
            .and_then(|raw| normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_encoding_and_modifier() {
        assert_eq!(normalize("de_DE.UTF-8"), Some("de_DE".into()));
        assert_eq!(normalize("en_US@calendar=gregorian"), Some("en_US".into()));
        assert_eq!(normalize("ja_JP"), Some("ja_JP".into()));
    }

    #[test]
    fn normalize_treats_posix_locales_as_absent() {
        assert_eq!(normalize("C"), None);
        assert_eq!(normalize("POSIX"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn lc_all_wins_over_lang() {
        temp_env::with_vars(
            vec![
                ("LC_ALL", Some("fr_FR.UTF-8")),
                ("LANG", Some("de_DE.UTF-8")),
            ],
            || {
                let resolver = EnvLocaleResolver::new();
                assert_eq!(resolver.locale(), Some("fr_FR".into()));
            },
        );
    }

    #[test]
    fn falls_back_to_lang() {
        temp_env::with_vars(
            vec![("LC_ALL", None::<&str>), ("LANG", Some("de_DE.UTF-8"))],
            || {
                let resolver = EnvLocaleResolver::new();
                assert_eq!(resolver.locale(), Some("de_DE".into()));
            },
        );
    }
}
