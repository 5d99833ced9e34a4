//! Property tests for cache operation sequences.
//!
//! The cache is checked against a plain `HashMap` model: any interleaving of
//! set/remove/clear must leave both sides observably identical through the
//! read operations (get, has, get_all, len).

use std::collections::HashMap;

use keyed_cache::{Cache, KeyedCache};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(String, i64),
    Remove(String),
    Clear,
}

// A small key alphabet keeps overwrite/remove collisions frequent.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("a".to_string()),
        Just("b".to_string()),
        "[a-z]{1,4}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_key(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        arb_key().prop_map(Op::Remove),
        Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any operation sequence leaves the cache agreeing with a HashMap
    /// model at every observation point.
    #[test]
    fn prop_cache_agrees_with_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut cache = KeyedCache::new();
        let mut model: HashMap<String, i64> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    cache.set(k.as_str(), v);
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    cache.remove(&k);
                    model.remove(&k);
                }
                Op::Clear => {
                    cache.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(cache.len(), model.len());
            for (k, v) in &model {
                prop_assert!(cache.has(k));
                prop_assert_eq!(cache.get(k), Some(v));
            }

            let snapshot = cache.get_all();
            prop_assert_eq!(snapshot.len(), model.len());
            for (k, v) in snapshot.iter() {
                prop_assert_eq!(model.get(k.as_str()), Some(v));
            }
        }
    }

    /// Keys that were never set read as absent, through every accessor.
    #[test]
    fn prop_unbound_keys_read_absent(keys in prop::collection::vec("[a-z]{1,8}", 0..16)) {
        let cache: KeyedCache<i64> = KeyedCache::new();
        for k in &keys {
            prop_assert_eq!(cache.get(k), None);
            prop_assert!(!cache.has(k));
        }
        prop_assert!(cache.get_all().is_empty());
        prop_assert_eq!(cache.stats().hits, 0);
    }

    /// A snapshot taken before mutation never changes afterwards.
    #[test]
    fn prop_snapshot_is_frozen(
        entries in prop::collection::hash_map("[a-z]{1,6}", any::<i64>(), 1..16),
        later in prop::collection::vec(arb_op(), 1..16),
    ) {
        let mut cache = KeyedCache::new();
        for (k, v) in &entries {
            cache.set(k.as_str(), *v);
        }
        let snapshot = cache.get_all();

        for op in later {
            match op {
                Op::Set(k, v) => cache.set(k.as_str(), v),
                Op::Remove(k) => cache.remove(&k),
                Op::Clear => cache.clear(),
            }
        }

        prop_assert_eq!(snapshot.len(), entries.len());
        for (k, v) in &entries {
            prop_assert_eq!(snapshot.get(k), Some(v));
        }
    }

    /// Clear unbinds every previously set key, whatever came before.
    #[test]
    fn prop_clear_unbinds_everything(
        entries in prop::collection::hash_map("[a-z]{1,6}", any::<i64>(), 0..32),
    ) {
        let mut cache = KeyedCache::new();
        for (k, v) in &entries {
            cache.set(k.as_str(), *v);
        }

        cache.clear();

        prop_assert!(cache.is_empty());
        prop_assert!(cache.get_all().is_empty());
        for k in entries.keys() {
            prop_assert!(!cache.has(k));
            prop_assert_eq!(cache.get(k), None);
        }
    }

    /// Hit/miss accounting matches the get sequence exactly.
    #[test]
    fn prop_stats_match_get_sequence(
        bound in prop::collection::hash_map("[a-m]{1,3}", any::<i64>(), 0..8),
        probes in prop::collection::vec("[a-z]{1,3}", 0..32),
    ) {
        let mut cache = KeyedCache::new();
        for (k, v) in &bound {
            cache.set(k.as_str(), *v);
        }

        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;
        for k in &probes {
            if cache.get(k).is_some() {
                expected_hits += 1;
            } else {
                expected_misses += 1;
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.entry_count, bound.len() as u64);
        prop_assert!(stats.hit_rate() >= 0.0 && stats.hit_rate() <= 1.0);
    }
}

/// The scenario from the cache contract, driven through the fixed interface.
#[test]
fn fixed_interface_scenario() {
    fn run<C: Cache<i64>>(cache: &mut C) {
        cache.set("a", 1);
        cache.set("b", 2);

        let all = cache.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("a"), Some(&1));
        assert_eq!(all.get("b"), Some(&2));

        cache.remove("a");
        let all = cache.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("b"), Some(&2));

        cache.clear();
        assert!(cache.get_all().is_empty());
    }

    run(&mut KeyedCache::new());
}

/// Values are opaque to the cache: a dynamic JSON document needs no special
/// treatment.
#[test]
fn stores_opaque_json_values() {
    let mut cache = KeyedCache::new();
    cache.set("point", serde_json::json!({"x": 1, "y": 2}));
    cache.set("tag", serde_json::json!("origin"));

    assert_eq!(cache.get("point").and_then(|v| v["x"].as_i64()), Some(1));
    assert!(cache.has("tag"));

    cache.remove("point");
    assert_eq!(cache.get("point"), None);
}
