//! # Scopes
//!
//! A scope is a configuration boundary (site/store) with its own timezone
//! setting. This crate never owns scopes; it only references them for
//! configuration lookups, through the [`Scope`] and [`ScopeResolver`]
//! ports.
//!
//! Callers hand scopes around in two shapes: a raw code (`"chicago"`) or an
//! already-resolved object. [`ScopeRef`] captures that distinction once at
//! the API boundary so the service logic can do exhaustive case analysis
//! instead of duck typing.

pub mod resolver;

pub use resolver::{ScopeResolver, StaticScopeResolver};

/// Scope type for the global configuration level.
pub const SCOPE_TYPE_DEFAULT: &str = "default";
/// Scope type for website-level configuration.
pub const SCOPE_TYPE_WEBSITE: &str = "website";
/// Scope type for store-level configuration.
pub const SCOPE_TYPE_STORE: &str = "store";

/// A resolved scope, exposing what configuration lookups need.
pub trait Scope: std::fmt::Debug + Send + Sync {
    /// The scope's code, used as the configuration lookup key.
    fn code(&self) -> &str;
}

/// The minimal [`Scope`]: just a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleScope {
    code: String,
}

impl SimpleScope {
    /// Creates a scope with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Scope for SimpleScope {
    fn code(&self) -> &str {
        &self.code
    }
}

/// A scope argument: either a raw identifier still to be resolved, or a
/// resolved scope object.
#[derive(Clone, Copy)]
pub enum ScopeRef<'a> {
    /// A raw scope code; the service resolves it through its
    /// [`ScopeResolver`] before use.
    Code(&'a str),
    /// An already-resolved scope; used as-is.
    Resolved(&'a dyn Scope),
}

impl<'a> From<&'a str> for ScopeRef<'a> {
    fn from(code: &'a str) -> Self {
        ScopeRef::Code(code)
    }
}

impl<'a> From<&'a SimpleScope> for ScopeRef<'a> {
    fn from(scope: &'a SimpleScope) -> Self {
        ScopeRef::Resolved(scope)
    }
}

impl<'a> From<&'a dyn Scope> for ScopeRef<'a> {
    fn from(scope: &'a dyn Scope) -> Self {
        ScopeRef::Resolved(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_scope_exposes_its_code() {
        let scope = SimpleScope::new("chicago");
        assert_eq!(scope.code(), "chicago");
    }

    #[test]
    fn scope_ref_from_str_is_a_raw_code() {
        let scope_ref: ScopeRef<'_> = "tokyo".into();
        assert!(matches!(scope_ref, ScopeRef::Code("tokyo")));
    }

    #[test]
    fn scope_ref_from_scope_is_resolved() {
        let scope = SimpleScope::new("berlin");
        let scope_ref: ScopeRef<'_> = (&scope).into();
        match scope_ref {
            ScopeRef::Resolved(resolved) => assert_eq!(resolved.code(), "berlin"),
            ScopeRef::Code(_) => panic!("expected a resolved scope"),
        }
    }
}
