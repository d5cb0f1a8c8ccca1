//! Cache Statistics Module
//!
//! Tracks lookup and slot-pressure counters. Purely observational: nothing in
//! the engine reads these back to make a decision.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of lookups that returned a live entry
    pub hits: u64,
    /// Number of lookups for absent or expired keys
    pub misses: u64,
    /// Number of entries removed by the eviction policy
    pub evictions: u64,
    /// Number of writes refused because no slot could be freed
    pub rejections: u64,
    /// Occupied slots, expired-but-unreclaimed entries included
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Counts a lookup that found a live entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a lookup for an absent or expired key.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Counts an entry removed to free a slot for a new key.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Rejection ==
    /// Counts a write refused because no slot could be freed.
    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    // == Update Entry Count ==
    /// Updates the occupied-slot count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
