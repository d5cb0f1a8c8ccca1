//! Slot Cache - a bounded JSON object cache server
//!
//! Stores objects under string keys with a per-entry TTL and a fixed number of
//! slots. When every slot is taken, a configurable eviction policy decides
//! whether a new key may displace an existing one.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use cache::{CacheEntry, CacheStore, EvictionPolicy, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
