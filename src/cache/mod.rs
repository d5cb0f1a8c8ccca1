//! Cache Module
//!
//! Slot-bounded caching with lazy TTL expiry and pluggable eviction.

mod clock;
mod entry;
mod policy;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, SystemClock};

#[cfg(any(test, feature = "test-util"))]
pub use clock::MockClock;
pub use entry::CacheEntry;
pub use policy::EvictionPolicy;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::{CacheStore, DEFAULT_CAPACITY, DEFAULT_TTL_SECONDS};
