//! Scope identity and the owning context for a cache instance.
//!
//! A cache lives exactly as long as the scope that created it. [`CacheScope`]
//! is that owner made concrete: one cache, instantiated once, with an
//! identity that stays stable for the whole lifetime of the scope value.
//! The cache itself knows nothing about this lifecycle.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::KeyedCache;
use crate::Timestamp;

/// Scope identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, making IDs naturally sortable by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Generate a new UUIDv7 scope id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A long-lived owning scope holding exactly one cache.
///
/// The host environment creates one `CacheScope` per logical scope and keeps
/// it alive across re-entries into that scope; the cache handle it owns is
/// therefore stable without any re-render machinery. Mutation reaches the
/// cache only through [`CacheScope::cache_mut`], so the scope remains the
/// single writer.
///
/// # Example
///
/// ```
/// use keyed_cache::CacheScope;
///
/// let mut scope = CacheScope::new();
/// let id = scope.scope_id();
///
/// scope.cache_mut().set("phase", "init");
/// scope.cache_mut().set("phase", "ready");
///
/// assert_eq!(scope.cache().get("phase"), Some(&"ready"));
/// assert_eq!(scope.scope_id(), id);
/// ```
#[derive(Debug)]
pub struct CacheScope<V> {
    scope_id: ScopeId,
    created_at: Timestamp,
    cache: KeyedCache<V>,
}

impl<V> CacheScope<V> {
    /// Create a scope with a fresh id and an empty cache.
    pub fn new() -> Self {
        Self::with_id(ScopeId::generate())
    }

    /// Create a scope with an explicit id and an empty cache.
    pub fn with_id(scope_id: ScopeId) -> Self {
        Self {
            scope_id,
            created_at: Utc::now(),
            cache: KeyedCache::new(),
        }
    }

    /// This scope's identity.
    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    /// When this scope (and its cache) was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Read access to the scope's cache.
    pub fn cache(&self) -> &KeyedCache<V> {
        &self.cache
    }

    /// Mutable access to the scope's cache.
    pub fn cache_mut(&mut self) -> &mut KeyedCache<V> {
        &mut self.cache
    }
}

impl<V> Default for CacheScope<V> {
    fn default() -> Self {
        Self::new()
    }
}
