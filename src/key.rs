//! Cache key type with a constructor-only surface.
//!
//! The private inner field ensures a [`CacheKey`] can only be built through
//! the constructors below; once built, a key is immutable.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A string-subtype identifier addressing one binding in a cache.
///
/// # Design
///
/// The inner `String` is private: a `CacheKey` is constructed only via
/// [`CacheKey::new`] or the `From` impls, and carries no mutable surface.
/// `Borrow<str>` lets every read operation look keys up by `&str` without
/// allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Create a new cache key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// View this key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
