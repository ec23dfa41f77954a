//! # ScopeResolver Port
//!
//! Resolves opaque scope identifiers to scope objects. The surrounding
//! application owns the actual scope registry (stores, websites); the
//! timezone service only needs codes for configuration lookups.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::scope::{Scope, SimpleScope};

/// Resolves scope identifiers to scope objects.
///
/// ## Contract
///
/// - `None` asks for the resolver's default scope (the "current" scope in
///   application terms).
/// - An unknown identifier is an error; resolvers must not invent scopes.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync`; the service shares them via
/// `Arc` and calls from any thread.
pub trait ScopeResolver: Send + Sync {
    /// Resolves the identifier, or the default scope for `None`.
    fn scope(&self, code: Option<&str>) -> Result<Arc<dyn Scope>>;
}

/// A fixed scope registry with a default scope, for tests and for
/// applications with a static scope set.
pub struct StaticScopeResolver {
    default_code: String,
    scopes: HashMap<String, Arc<dyn Scope>>,
}

impl StaticScopeResolver {
    /// Creates a resolver whose default scope has the given code. The
    /// default scope itself is registered immediately.
    pub fn new(default_code: impl Into<String>) -> Self {
        let default_code = default_code.into();
        let mut scopes: HashMap<String, Arc<dyn Scope>> = HashMap::new();
        scopes.insert(
            default_code.clone(),
            Arc::new(SimpleScope::new(default_code.clone())),
        );
        Self {
            default_code,
            scopes,
        }
    }

    /// Registers a scope under its own code, builder style.
    pub fn with_scope(mut self, scope: impl Scope + 'static) -> Self {
        self.scopes.insert(scope.code().to_string(), Arc::new(scope));
        self
    }
}

impl ScopeResolver for StaticScopeResolver {
    fn scope(&self, code: Option<&str>) -> Result<Arc<dyn Scope>> {
        let code = code.unwrap_or(&self.default_code);
        match self.scopes.get(code) {
            Some(scope) => Ok(Arc::clone(scope)),
            None => bail!("unknown scope {code:?}"),
        }
    }
}
