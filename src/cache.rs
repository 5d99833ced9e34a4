//! The keyed cache and its frozen snapshot view.
//!
//! [`KeyedCache`] holds one mapping from [`CacheKey`] to values and exposes
//! it only through a fixed set of operations. The mapping itself is never
//! reachable from outside: reads hand out `&V` or a defensive [`Snapshot`]
//! copy, and the three mutating operations (`set`, `remove`, `clear`) take
//! `&mut self`, so exclusive ownership of the cache is a borrow-checker
//! fact rather than a convention.

use std::cell::Cell;
use std::collections::HashMap;

use serde::Serialize;

use crate::key::CacheKey;
use crate::traits::CacheStats;

/// In-memory key/value cache owned by a single scope.
///
/// # Guard
///
/// Bindings enter the cache through [`KeyedCache::set`] and leave through
/// [`KeyedCache::remove`] or [`KeyedCache::clear`]; there is no other
/// mutation path. The entry map is a private field and the type implements
/// neither `Index` nor `IndexMut`, so writing around the API does not
/// compile:
///
/// ```compile_fail
/// use keyed_cache::KeyedCache;
///
/// let mut cache = KeyedCache::<i32>::new();
/// cache["answer"] = 42; // no IndexMut impl exists
/// ```
///
/// ```compile_fail
/// use keyed_cache::KeyedCache;
///
/// let mut cache = KeyedCache::<i32>::new();
/// cache.entries.insert("answer".into(), 42); // field is private
/// ```
///
/// # Accounting
///
/// [`KeyedCache::get`] records a hit or a miss; [`KeyedCache::has`] and
/// [`KeyedCache::get_all`] do not. Counters live in `Cell`s: the cache is
/// specified single-owner and single-threaded, so interior mutability
/// without locking is sufficient (and keeps `get` at `&self`).
///
/// # Example
///
/// ```
/// use keyed_cache::KeyedCache;
///
/// let mut cache = KeyedCache::new();
/// cache.set("a", 1);
/// cache.set("b", 2);
///
/// assert_eq!(cache.get("a"), Some(&1));
/// assert_eq!(cache.get("missing"), None);
///
/// cache.remove("a");
/// assert!(!cache.has("a"));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct KeyedCache<V> {
    /// Private entry map - the guard is that nothing outside this module
    /// can touch it.
    entries: HashMap<CacheKey, V>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<V> KeyedCache<V> {
    /// Create an empty cache. Takes no configuration.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Get the value bound to `key`, or `None` if the key is unbound.
    ///
    /// `None` is a true absent sentinel: it can never collide with a stored
    /// value, including caches of `Option<T>` values (those read back as
    /// `Some(&None)`).
    pub fn get(&self, key: &str) -> Option<&V> {
        let found = self.entries.get(key);
        match found {
            Some(_) => self.hits.set(self.hits.get() + 1),
            None => self.misses.set(self.misses.get() + 1),
        }
        found
    }

    /// Take a frozen copy of the full mapping as of this call.
    ///
    /// The returned [`Snapshot`] shares no state with the cache: later
    /// mutations of either side leave the other untouched.
    pub fn get_all(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        Snapshot {
            entries: self.entries.clone(),
        }
    }

    /// True iff `key` is currently bound. Does not count as a hit or miss.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Bind `key` to `value`, silently overwriting any prior binding.
    ///
    /// This is the only way to introduce or update a binding.
    pub fn set(&mut self, key: impl Into<CacheKey>, value: V) {
        self.entries.insert(key.into(), value);
    }

    /// Unbind `key` if present; a no-op (never an error) if absent.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Discard every binding, leaving the cache empty.
    ///
    /// Hit/miss counters are lifetime counters and survive a clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of bindings currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no bindings are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usage statistics as of this call.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            entry_count: self.entries.len() as u64,
        }
    }
}

impl<V> Default for KeyedCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Frozen view of a cache's contents at the moment [`KeyedCache::get_all`]
/// was called.
///
/// A `Snapshot` is a defensive copy with no mutating surface at all, so the
/// "mutate the returned mapping and hope it reaches the cache" mistake is
/// unrepresentable rather than undefined behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<V> {
    entries: HashMap<CacheKey, V>,
}

impl<V> Snapshot<V> {
    /// Get the value bound to `key` in this snapshot.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// True iff `key` was bound when the snapshot was taken.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of bindings in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff the snapshot holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the snapshot's bindings (order is unspecified).
    pub fn iter(&self) -> impl Iterator<Item = (&CacheKey, &V)> {
        self.entries.iter()
    }
}

impl<V> IntoIterator for Snapshot<V> {
    type Item = (CacheKey, V);
    type IntoIter = std::collections::hash_map::IntoIter<CacheKey, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Snapshot<V> {
    type Item = (&'a CacheKey, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, CacheKey, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
