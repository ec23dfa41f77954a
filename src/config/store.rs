//! # ConfigStore Port
//!
//! The read contract the timezone service consumes. Implementations decide
//! where configuration lives (memory, environment, database, remote config)
//! and how scope fallback works; the service only asks for a value.

/// A read-only, scope-aware configuration lookup.
///
/// ## Contract
///
/// - `path` is a slash-separated setting path, e.g.
///   `"general/locale/timezone"`.
/// - `scope_type` names the scope dimension (`"default"`, `"website"`,
///   `"store"`).
/// - `scope_code` selects a concrete scope; `None` means the store's own
///   default for that scope type.
/// - Returns `None` when nothing is configured. Values are returned as-is:
///   the store performs no validation, and an empty string is passed
///   through untouched.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync`; the service shares them via
/// `Arc` and calls from any thread.
pub trait ConfigStore: Send + Sync {
    /// Returns the configured value at `path` for the given scope.
    fn value(&self, path: &str, scope_type: &str, scope_code: Option<&str>) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleValue;

    impl ConfigStore for SingleValue {
        fn value(&self, path: &str, _: &str, _: Option<&str>) -> Option<String> {
            (path == "general/locale/timezone").then(|| "UTC".to_string())
        }
    }

    #[test]
    fn trait_object_lookup_works() {
        let store: Box<dyn ConfigStore> = Box::new(SingleValue);

        assert_eq!(
            store.value("general/locale/timezone", "store", None),
            Some("UTC".into())
        );
        assert_eq!(store.value("other/path", "store", None), None);
    }
}
