//! Per-scope in-memory keyed cache with a guarded mutation surface.
//!
//! This crate provides a key/value cache that is owned by exactly one
//! long-lived scope: created empty with that scope, mutated only by it, and
//! dropped with it. There is no eviction, no persistence, no expiration,
//! and no internal synchronization; every operation is a synchronous local
//! call that runs to completion.
//!
//! # Design Philosophy
//!
//! A cache that can be written around its own API invites state corruption
//! the moment the cache object is passed around and treated as a plain
//! record. This crate makes that bypass impossible at compile time - not a
//! runtime check, but structurally enforced by the type system. The entry
//! map is private, neither `Index` nor `IndexMut` is implemented, and
//! [`KeyedCache::set`] is the only write path. [`KeyedCache::get_all`]
//! returns a frozen [`Snapshot`] rather than a live view, so mutating the
//! returned structure cannot silently diverge from the cache.
//!
//! # Example
//!
//! ```
//! use keyed_cache::CacheScope;
//!
//! // One scope, one cache, stable for the scope's lifetime.
//! let mut scope = CacheScope::new();
//! scope.cache_mut().set("answer", 42);
//!
//! assert_eq!(scope.cache().get("answer"), Some(&42));
//! assert!(scope.cache().has("answer"));
//!
//! scope.cache_mut().clear();
//! assert!(scope.cache().is_empty());
//! ```

pub mod cache;
pub mod key;
pub mod scope;
pub mod traits;

pub use cache::{KeyedCache, Snapshot};
pub use key::CacheKey;
pub use scope::{CacheScope, ScopeId};
pub use traits::{Cache, CacheStats};

/// Timestamp type using UTC timezone.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
