//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the slot, expiry and eviction guarantees over
//! arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::{CacheStore, EvictionPolicy, MockClock};
use crate::error::CacheError;

// == Test Configuration ==
const TEST_DEFAULT_TTL: i64 = 300;

// == Strategies ==
/// Small key space so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}"
}

fn payload_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,32}".prop_map(|s| serde_json::Value::String(s).to_string())
}

fn policy_strategy() -> impl Strategy<Value = EvictionPolicy> {
    prop_oneof![
        Just(EvictionPolicy::Reject),
        Just(EvictionPolicy::OldestFirst),
        Just(EvictionPolicy::NewestFirst),
    ]
}

/// TTLs kept short relative to the clock steps so entries do expire
fn ttl_strategy() -> impl Strategy<Value = Option<u64>> {
    prop_oneof![Just(None), Just(Some(0)), (1u64..5).prop_map(Some)]
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set {
        key: String,
        payload: String,
        ttl: Option<u64>,
    },
    Get {
        key: String,
    },
    Delete {
        key: String,
    },
    Tick {
        millis: u64,
    },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), payload_strategy(), ttl_strategy())
            .prop_map(|(key, payload, ttl)| CacheOp::Set { key, payload, ttl }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        2 => (0u64..3_000).prop_map(|millis| CacheOp::Tick { millis }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_capacity_invariant(
        capacity in 1i64..6,
        policy in policy_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let clock = MockClock::new();
        let mut store = CacheStore::with_clock(capacity, TEST_DEFAULT_TTL, policy, clock.clone());

        for op in ops {
            match op {
                CacheOp::Set { key, payload, ttl } => {
                    let len_before = store.len();
                    let existed = store.contains_slot(&key);
                    match store.set(key.clone(), payload.clone(), ttl) {
                        Ok(()) => {
                            prop_assert_eq!(&store.get(&key).unwrap().payload, &payload);
                        }
                        Err(CacheError::StorageExhausted(_)) => {
                            // Only REJECT refuses, and a refusal changes nothing
                            prop_assert_eq!(policy, EvictionPolicy::Reject);
                            prop_assert!(!existed);
                            prop_assert_eq!(store.len(), len_before);
                            prop_assert!(!store.contains_slot(&key));
                        }
                        Err(other) => prop_assert!(false, "unexpected error {:?}", other),
                    }
                }
                CacheOp::Get { key } => {
                    let _ = store.get(&key);
                }
                CacheOp::Delete { key } => {
                    let _ = store.delete(&key);
                    prop_assert!(!store.contains_slot(&key));
                }
                CacheOp::Tick { millis } => clock.advance(Duration::from_millis(millis)),
            }
            prop_assert!(store.len() <= store.capacity());
        }
    }

    #[test]
    fn prop_update_never_evicts(
        keys in prop::collection::hash_set(key_strategy(), 1..6),
        policy in policy_strategy(),
        pick in any::<prop::sample::Index>(),
        payload in payload_strategy()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let clock = MockClock::new();
        let mut store =
            CacheStore::with_clock(keys.len() as i64, TEST_DEFAULT_TTL, policy, clock.clone());

        for key in &keys {
            store.set(key.clone(), "null".to_string(), Some(0)).unwrap();
            clock.advance(Duration::from_millis(1));
        }

        let target = pick.get(&keys).clone();
        prop_assert!(store.set(target.clone(), payload.clone(), Some(0)).is_ok());

        prop_assert_eq!(store.stats().evictions, 0);
        prop_assert_eq!(store.len(), keys.len());
        for key in &keys {
            prop_assert!(store.get(key).is_ok());
        }
        prop_assert_eq!(&store.get(&target).unwrap().payload, &payload);
    }

    #[test]
    fn prop_ttl_zero_is_eternal(
        key in key_strategy(),
        payload in payload_strategy(),
        elapsed_secs in 0u64..10_000_000_000
    ) {
        let clock = MockClock::new();
        let mut store = CacheStore::with_clock(4, 1, EvictionPolicy::Reject, clock.clone());

        store.set(key.clone(), payload.clone(), Some(0)).unwrap();
        clock.advance(Duration::from_secs(elapsed_secs));

        prop_assert_eq!(&store.get(&key).unwrap().payload, &payload);
    }

    #[test]
    fn prop_expiry_is_monotonic(
        key in key_strategy(),
        ttl in 1u64..10,
        steps in prop::collection::vec(0u64..5_000, 1..20)
    ) {
        let clock = MockClock::new();
        let mut store = CacheStore::with_clock(4, TEST_DEFAULT_TTL, EvictionPolicy::Reject, clock.clone());
        store.set(key.clone(), "1".to_string(), Some(ttl)).unwrap();

        let mut expired = false;
        for millis in steps {
            clock.advance(Duration::from_millis(millis));
            let absent = store.get(&key).is_err();
            prop_assert!(!(expired && !absent), "expired key became visible again");
            expired |= absent;
        }
    }

    #[test]
    fn prop_age_policies_evict_extremal_entry(
        keys in prop::collection::hash_set("[a-z]{3}", 2..8),
        newcomer in "[0-9]{3}",
        newest in any::<bool>()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let policy = if newest { EvictionPolicy::NewestFirst } else { EvictionPolicy::OldestFirst };
        let clock = MockClock::new();
        let mut store = CacheStore::with_clock(keys.len() as i64, TEST_DEFAULT_TTL, policy, clock.clone());

        for key in &keys {
            store.set(key.clone(), "0".to_string(), Some(0)).unwrap();
            clock.advance(Duration::from_millis(10));
        }

        store.set(newcomer.clone(), "1".to_string(), Some(0)).unwrap();

        let expected_victim = if newest { keys.last() } else { keys.first() };
        let expected_victim: HashSet<&String> = expected_victim.into_iter().collect();
        for key in &keys {
            prop_assert_eq!(store.get(key).is_err(), expected_victim.contains(key));
        }
        prop_assert!(store.get(&newcomer).is_ok());
    }
}

// Property tests for the shared handle
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_concurrent_operations_respect_capacity(
        capacity in 1i64..5,
        policy in policy_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 10..60)
    ) {
        use crate::cache::SharedCache;

        let cache = SharedCache::new(capacity, TEST_DEFAULT_TTL, policy);

        // Multi-threaded runtime so spawned operations really interleave
        let rt = tokio::runtime::Runtime::new().unwrap();
        let outcome: Result<(), String> = rt.block_on(async {
            let mut handles = vec![];

            for op in ops {
                let cache = cache.clone();
                handles.push(tokio::spawn(async move {
                    match op {
                        CacheOp::Set { key, payload, ttl } => {
                            match cache.set(key, payload, ttl).await {
                                Ok(()) | Err(CacheError::StorageExhausted(_)) => {}
                                Err(other) => return Err(format!("unexpected error {:?}", other)),
                            }
                        }
                        CacheOp::Get { key } => {
                            let _ = cache.get(&key).await;
                        }
                        CacheOp::Delete { key } => {
                            let _ = cache.delete(&key).await;
                        }
                        CacheOp::Tick { .. } => tokio::task::yield_now().await,
                    }
                    if cache.len().await > cache.capacity() {
                        return Err("store exceeded capacity".to_string());
                    }
                    Ok(())
                }));
            }

            for handle in handles {
                handle.await.map_err(|e| e.to_string())??;
            }
            Ok::<(), String>(())
        });

        prop_assert!(outcome.is_ok(), "{:?}", outcome);
    }
}
