//! Cache Store Module
//!
//! Slot-bounded engine: HashMap storage, lazy TTL expiry and a configurable
//! eviction policy for writes that arrive when every slot is taken.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, EvictionPolicy, SystemClock};
use crate::error::{CacheError, Result};

/// Slot count used when the configured capacity is not positive.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// TTL in seconds used when the configured default is not positive.
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

// == Cache Store ==
/// Bounded key/value store with per-entry TTL.
///
/// Expired entries are never purged proactively. A read treats them as absent
/// and leaves them in place; they physically go away only when a delete, an
/// overwrite or an eviction scan reaches them.
#[derive(Debug)]
pub struct CacheStore<C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Maximum number of occupied slots
    capacity: usize,
    /// TTL in seconds for writes that do not supply one
    default_ttl: u64,
    /// Victim selection when the store is full
    policy: EvictionPolicy,
    clock: C,
}

impl CacheStore<SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore backed by the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; non-positive means [`DEFAULT_CAPACITY`]
    /// * `default_ttl` - Default TTL in seconds; non-positive means [`DEFAULT_TTL_SECONDS`]
    /// * `policy` - Eviction policy used once the store is full
    pub fn new(capacity: i64, default_ttl: i64, policy: EvictionPolicy) -> Self {
        Self::with_clock(capacity, default_ttl, policy, SystemClock)
    }
}

impl<C: Clock> CacheStore<C> {
    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(capacity: i64, default_ttl: i64, policy: EvictionPolicy, clock: C) -> Self {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|slots| *slots > 0)
            .unwrap_or(DEFAULT_CAPACITY);
        let default_ttl = u64::try_from(default_ttl)
            .ok()
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TTL_SECONDS);

        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
            policy,
            clock,
        }
    }

    // == Get ==
    /// Returns the live entry stored under `key`.
    ///
    /// An expired entry reports [`CacheError::NotFound`] but stays in the map.
    pub fn get(&self, key: &str) -> Result<&CacheEntry> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Set ==
    /// Stores `payload` under `key`.
    ///
    /// Overwriting an existing key (expired or not) always succeeds and never
    /// consults capacity. A new key takes a free slot if there is one; otherwise
    /// the eviction policy must name a victim or the write is refused with
    /// [`CacheError::StorageExhausted`] and nothing changes.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `payload` - The serialized value
    /// * `ttl` - TTL in seconds; `Some(0)` never expires, `None` uses the default
    pub fn set(&mut self, key: String, payload: String, ttl: Option<u64>) -> Result<()> {
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(payload, ttl.unwrap_or(self.default_ttl), now);

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = entry;
            return Ok(());
        }

        if self.entries.len() >= self.capacity {
            let victim = self
                .policy
                .select_victim(&self.entries, now)
                .map(str::to_owned);

            match victim {
                Some(victim) => {
                    self.entries.remove(&victim);
                    self.stats.record_eviction();
                    debug!(%victim, %key, policy = %self.policy, "evicted entry to free a slot");
                }
                None => {
                    self.stats.record_rejection();
                    debug!(%key, policy = %self.policy, "cache full, write rejected");
                    return Err(CacheError::StorageExhausted(key));
                }
            }
        }

        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Delete ==
    /// Removes `key` from the store.
    ///
    /// The entry is removed whenever it is present, but only a live entry
    /// counts as deleted: removing an expired one still reports
    /// [`CacheError::NotFound`].
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let now = self.clock.now_ms();
        let removed = self.entries.remove(key);
        self.stats.set_total_entries(self.entries.len());

        match removed {
            Some(entry) if !entry.is_expired_at(now) => Ok(()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    /// Counts a lookup outcome in the statistics.
    pub(crate) fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Occupied slots, including expired entries not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Whether `key` occupies a slot, live or not.
    #[cfg(test)]
    pub(crate) fn contains_slot(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
