//! Cache Key Module
//!
//! Derives the cache key for a request from its cache-relevant attributes.

use std::fmt;

// == Cache Key ==
/// The key a rendered page is cached under.
///
/// Derivation is a total function of the declared cache-relevant request
/// attributes: the path and the raw query string. Any server-side state
/// that changes rendering output (a session locale, an A/B bucket) must be
/// added HERE, so that pages rendered for one user are never served to
/// another. Keeping the derivation in one place makes such an addition an
/// explicit, reviewable change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    // == Constructor ==
    /// Derives the key from a request path and optional raw query string.
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        match query {
            Some(q) if !q.is_empty() => Self(format!("{path}?{q}")),
            _ => Self(path.to_string()),
        }
    }

    // == As Str ==
    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
