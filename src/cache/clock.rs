//! Time source for the cache engine.
//!
//! Entries are stamped and checked for expiry through a [`Clock`] so tests can
//! drive time explicitly instead of sleeping.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(any(test, feature = "test-util"))]
use std::{
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::Duration,
};

/// Wall-clock source in Unix milliseconds.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now_ms(&self) -> u64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        current_timestamp_ms()
    }
}

/// Manually advanced clock. Clones share the same instant.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<AtomicU64>,
}

#[cfg(any(test, feature = "test-util"))]
impl MockClock {
    /// Arbitrary fixed starting instant (2023-11-14T22:13:20Z).
    pub const START_MS: u64 = 1_700_000_000_000;

    pub fn new() -> Self {
        Self::at(Self::START_MS)
    }

    pub fn at(now_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_ms)),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now
            .fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds, or 0 if the system clock
/// reads before the epoch.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
