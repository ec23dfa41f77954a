//! # In-Memory Configuration Store
//!
//! A [`ConfigStore`] backed by a plain map. Scoped entries win over
//! scope-type defaults, which win over `default`-scope entries, mirroring
//! how scoped configuration systems collapse to their global setting.
//!
//! # Example
//! ```
//! use scopetz::config::{ConfigStore, MemoryConfigStore, DEFAULT_TIMEZONE_PATH};
//!
//! let store = MemoryConfigStore::new()
//!     .set(DEFAULT_TIMEZONE_PATH, "store", None, "UTC")
//!     .set(DEFAULT_TIMEZONE_PATH, "store", Some("chicago"), "America/Chicago");
//!
//! assert_eq!(
//!     store.value(DEFAULT_TIMEZONE_PATH, "store", Some("chicago")),
//!     Some("America/Chicago".into())
//! );
//! assert_eq!(
//!     store.value(DEFAULT_TIMEZONE_PATH, "store", Some("berlin")),
//!     Some("UTC".into())
//! );
//! ```

use std::collections::HashMap;

use crate::config::store::ConfigStore;
use crate::scope;

type Key = (String, String, Option<String>);

/// Map-backed configuration, built up with [`MemoryConfigStore::set`].
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: HashMap<Key, String>,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style. A `None` scope code registers the
    /// default for that scope type.
    pub fn set(
        mut self,
        path: impl Into<String>,
        scope_type: impl Into<String>,
        scope_code: Option<&str>,
        value: impl Into<String>,
    ) -> Self {
        self.values.insert(
            (
                path.into(),
                scope_type.into(),
                scope_code.map(str::to_string),
            ),
            value.into(),
        );
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn value(&self, path: &str, scope_type: &str, scope_code: Option<&str>) -> Option<String> {
        let exact = (
            path.to_string(),
            scope_type.to_string(),
            scope_code.map(str::to_string),
        );
        if let Some(value) = self.values.get(&exact) {
            return Some(value.clone());
        }
        if scope_code.is_some() {
            let type_default = (path.to_string(), scope_type.to_string(), None);
            if let Some(value) = self.values.get(&type_default) {
                return Some(value.clone());
            }
        }
        if scope_type != scope::SCOPE_TYPE_DEFAULT {
            let global = (path.to_string(), scope::SCOPE_TYPE_DEFAULT.to_string(), None);
            return self.values.get(&global).cloned();
        }
        None
    }
}
