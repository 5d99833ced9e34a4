//! The fixed cache interface and usage statistics.
//!
//! [`Cache`] is the whole contract: exactly six operations, three of which
//! mutate and all of which take the receiver by reference. An implementor
//! that adds no other write path gets the guard property for free - there
//! is simply nothing else to call.

use serde::{Deserialize, Serialize};

use crate::cache::{KeyedCache, Snapshot};

/// The fixed, guarded interface to a keyed cache.
///
/// # Contract
///
/// - each key maps to at most one value; `set` overwrites silently
/// - `set` is the only way to introduce or update a binding
/// - `get`/`has` on unbound keys and `remove`/`clear` on missing state are
///   no-ops or absent reads, never errors
pub trait Cache<V> {
    /// Value bound to `key`, or `None` if unbound.
    fn get(&self, key: &str) -> Option<&V>;

    /// Frozen copy of the full mapping as of this call.
    fn get_all(&self) -> Snapshot<V>
    where
        V: Clone;

    /// True iff `key` is currently bound.
    fn has(&self, key: &str) -> bool;

    /// Bind `key` to `value`, overwriting any prior binding.
    fn set(&mut self, key: &str, value: V);

    /// Unbind `key`; no-op if unbound.
    fn remove(&mut self, key: &str);

    /// Discard every binding.
    fn clear(&mut self);
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of `get` calls that found a binding.
    pub hits: u64,
    /// Number of `get` calls that found nothing.
    pub misses: u64,
    /// Number of bindings currently held.
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// ============================================================================
// IMPLEMENTATION FOR THE IN-MEMORY CACHE
// ============================================================================

impl<V> Cache<V> for KeyedCache<V> {
    fn get(&self, key: &str) -> Option<&V> {
        KeyedCache::get(self, key)
    }

    fn get_all(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        KeyedCache::get_all(self)
    }

    fn has(&self, key: &str) -> bool {
        KeyedCache::has(self, key)
    }

    fn set(&mut self, key: &str, value: V) {
        KeyedCache::set(self, key, value);
    }

    fn remove(&mut self, key: &str) {
        KeyedCache::remove(self, key);
    }

    fn clear(&mut self) {
        KeyedCache::clear(self);
    }
}
