//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// One stored payload and the metadata needed to decide whether it expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Serialized object, opaque to the engine
    pub payload: String,
    /// Time to live in seconds, 0 = never expires
    pub ttl_seconds: u64,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped at `created_at`.
    ///
    /// # Arguments
    /// * `payload` - The serialized value to store
    /// * `ttl_seconds` - TTL in seconds, `0` for no expiry
    /// * `created_at` - Creation time in Unix milliseconds
    pub fn new(payload: String, ttl_seconds: u64, created_at: u64) -> Self {
        Self {
            payload,
            ttl_seconds,
            created_at,
        }
    }

    /// Last instant (Unix milliseconds) at which the entry is still live, or
    /// `None` for entries that never expire.
    pub fn expires_at(&self) -> Option<u64> {
        if self.ttl_seconds == 0 {
            return None;
        }
        Some(
            self.created_at
                .saturating_add(self.ttl_seconds.saturating_mul(1000)),
        )
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// Boundary condition: the entry is still live exactly at
    /// `created_at + ttl`; it expires only once that instant has passed.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        match self.expires_at() {
            Some(expires) => now_ms > expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in whole seconds at `now_ms`.
    ///
    /// # Returns
    /// - `None` if the entry never expires
    /// - `Some(0)` once the TTL has elapsed
    pub fn ttl_remaining_at(&self, now_ms: u64) -> Option<u64> {
        self.expires_at()
            .map(|expires| expires.saturating_sub(now_ms) / 1000)
    }
}
