//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. A successful GET
//! returns the stored object itself, so it has no wrapper type here.

use serde::Serialize;

use crate::cache::{CacheStats, EvictionPolicy};

/// Body for write and delete outcomes: `{"message": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The body returned by every successful write or delete.
    pub fn success() -> Self {
        Self::new("success")
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups that returned a live entry
    pub hits: u64,
    /// Number of lookups for absent or expired keys
    pub misses: u64,
    /// Number of entries removed by the eviction policy
    pub evictions: u64,
    /// Number of writes refused for lack of a slot
    pub rejections: u64,
    /// Occupied slots
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Maximum number of slots
    pub capacity: usize,
    /// Default TTL in seconds
    pub default_ttl: u64,
    /// Configured eviction policy
    pub eviction_policy: EvictionPolicy,
}

impl StatsResponse {
    /// Combines live counters with the engine's fixed configuration.
    pub fn new(
        stats: &CacheStats,
        capacity: usize,
        default_ttl: u64,
        eviction_policy: EvictionPolicy,
    ) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejections: stats.rejections,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            capacity,
            default_ttl,
            eviction_policy,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
