//! Shared Cache Handle
//!
//! Thread-safe front for [`CacheStore`]. Every operation runs under one
//! exclusive lock, so an eviction and the insert that caused it are observed
//! together or not at all.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{CacheEntry, CacheStats, CacheStore, Clock, EvictionPolicy, SystemClock};
use crate::error::Result;

/// Cloneable handle to a single cache engine instance.
#[derive(Debug)]
pub struct SharedCache<C = SystemClock> {
    inner: Arc<Mutex<CacheStore<C>>>,
    capacity: usize,
    default_ttl: u64,
    policy: EvictionPolicy,
}

impl<C> Clone for SharedCache<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            capacity: self.capacity,
            default_ttl: self.default_ttl,
            policy: self.policy,
        }
    }
}

impl SharedCache<SystemClock> {
    /// Builds a shared engine with the system clock. Arguments are coerced as
    /// in [`CacheStore::new`].
    pub fn new(capacity: i64, default_ttl: i64, policy: EvictionPolicy) -> Self {
        Self::from_store(CacheStore::new(capacity, default_ttl, policy))
    }
}

impl<C: Clock> SharedCache<C> {
    /// Takes ownership of `store`; all further access goes through the handle.
    pub fn from_store(store: CacheStore<C>) -> Self {
        Self {
            capacity: store.capacity(),
            default_ttl: store.default_ttl(),
            policy: store.policy(),
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // == Get ==
    /// Returns a copy of the live entry under `key` and counts the lookup.
    pub async fn get(&self, key: &str) -> Result<CacheEntry> {
        let mut store = self.inner.lock().await;
        let found = store.get(key).cloned();
        store.record_lookup(found.is_ok());
        found
    }

    // == Set ==
    /// Stores `payload` under `key`; any eviction happens under the same lock.
    ///
    /// See [`CacheStore::set`].
    pub async fn set(&self, key: String, payload: String, ttl: Option<u64>) -> Result<()> {
        self.inner.lock().await.set(key, payload, ttl)
    }

    // == Delete ==
    /// Removes `key`. See [`CacheStore::delete`].
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.inner.lock().await.delete(key)
    }

    // == Stats ==
    /// Returns a snapshot of the engine's counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    // == Length ==
    /// Returns the number of occupied slots.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if no slot is occupied.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    // == Configuration ==
    /// Maximum number of occupied slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// TTL in seconds applied when a write supplies none.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Eviction policy fixed at construction.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }
}
