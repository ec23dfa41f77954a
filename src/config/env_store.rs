//! # Environment-Backed Configuration Store
//!
//! A [`ConfigStore`] reading from process environment variables, for
//! deployments configured the twelve-factor way.
//!
//! A setting path maps to an upper-snake key: `general/locale/timezone`
//! becomes `GENERAL_LOCALE_TIMEZONE`. Scoped values prepend the scope:
//! `STORE_CHICAGO_GENERAL_LOCALE_TIMEZONE`. Lookup tries the scoped key
//! first and falls back to the scopeless one.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment; dotenv files load outside `production` | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `<SCOPE>_<CODE>_<PATH>` | Scoped setting value | *none* |
//! | `<PATH>` | Scopeless setting value | *none* |

use std::env;

use crate::config::store::ConfigStore;

/// Reads configuration values from environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigStore;

impl EnvConfigStore {
    /// Creates a store over the current process environment. No dotenv
    /// files are loaded; use [`EnvConfigStore::from_env`] for that.
    pub fn new() -> Self {
        Self
    }

    /// Creates a store after loading dotenv files for non-production
    /// environments.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Outside production, loads `DOTENV_FILE` when set, otherwise
    ///   `.env.{APP_ENV}` with a final fallback to `.env`.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{app_env}");
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        Self
    }
}

/// Upper-snakes a path or code segment: every non-alphanumeric character
/// becomes an underscore.
fn env_segment(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

impl ConfigStore for EnvConfigStore {
    fn value(&self, path: &str, scope_type: &str, scope_code: Option<&str>) -> Option<String> {
        let base = env_segment(path);
        if let Some(code) = scope_code {
            let scoped = format!("{}_{}_{}", env_segment(scope_type), env_segment(code), base);
            if let Ok(value) = env::var(&scoped) {
                return Some(value);
            }
        }
        env::var(&base).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TIMEZONE_PATH;

    #[test]
    fn path_maps_to_upper_snake_key() {
        assert_eq!(
            env_segment("general/locale/timezone"),
            "GENERAL_LOCALE_TIMEZONE"
        );
        assert_eq!(env_segment("store-1"), "STORE_1");
    }

    #[test]
    fn reads_scopeless_key() {
        temp_env::with_vars(
            vec![("GENERAL_LOCALE_TIMEZONE", Some("Asia/Tokyo"))],
            || {
                let store = EnvConfigStore::new();
                assert_eq!(
                    store.value(DEFAULT_TIMEZONE_PATH, "store", None),
                    Some("Asia/Tokyo".into())
                );
            },
        );
    }

    #[test]
    fn scoped_key_wins_over_scopeless() {
        temp_env::with_vars(
            vec![
                ("GENERAL_LOCALE_TIMEZONE", Some("UTC")),
                (
                    "STORE_CHICAGO_GENERAL_LOCALE_TIMEZONE",
                    Some("America/Chicago"),
                ),
            ],
            || {
                let store = EnvConfigStore::new();
                assert_eq!(
                    store.value(DEFAULT_TIMEZONE_PATH, "store", Some("chicago")),
                    Some("America/Chicago".into())
                );
                assert_eq!(
                    store.value(DEFAULT_TIMEZONE_PATH, "store", Some("berlin")),
                    Some("UTC".into())
                );
            },
        );
    }

    #[test]
    fn missing_keys_are_none() {
        temp_env::with_vars(vec![("GENERAL_LOCALE_TIMEZONE", None::<&str>)], || {
            let store = EnvConfigStore::new();
            assert_eq!(store.value(DEFAULT_TIMEZONE_PATH, "store", None), None);
        });
    }
}
