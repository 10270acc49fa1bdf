//! Property-Based Tests for the cache store

use proptest::prelude::*;

use crate::cache::CacheStore;

const TEST_TTL: u64 = 300;

fn key_strategy() -> impl Strategy<Value = String> {
    "palindrome:[a-f0-9]{1,64}"
}

fn verdict_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("true".to_string()), Just("false".to_string())]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), verdict_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Hit and miss counters reflect every lookup exactly once.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(100);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set_ex(key, value, TEST_TTL).unwrap();
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // The store never holds more than its capacity.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((key_strategy(), verdict_strategy()), 1..200)
    ) {
        let max_entries = 20;
        let mut store = CacheStore::new(max_entries);

        for (key, value) in entries {
            store.set_ex(key, value, TEST_TTL).unwrap();
            prop_assert!(store.len() <= max_entries);
        }
    }

    // The most recent write for a key is always what a read returns.
    #[test]
    fn prop_last_write_wins(
        key in key_strategy(),
        values in prop::collection::vec(verdict_strategy(), 1..10),
    ) {
        let mut store = CacheStore::new(100);

        for value in &values {
            store.set_ex(key.clone(), value.clone(), TEST_TTL).unwrap();
        }

        prop_assert_eq!(store.get(&key), values.last().cloned());
        prop_assert_eq!(store.len(), 1);
    }
}
