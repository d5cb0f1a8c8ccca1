//! Eviction Policy Module
//!
//! Chooses which entry gives up its slot when a new key arrives at a full cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;
use crate::error::CacheError;

// == Eviction Policy ==
/// Rule applied when a write needs a slot and the cache is full.
///
/// Every policy reclaims an expired entry first if one exists. They differ only
/// in what happens when all entries are live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvictionPolicy {
    /// Never evict a live entry; the write fails instead
    #[default]
    Reject,
    /// Evict the live entry with the earliest creation time
    OldestFirst,
    /// Evict the live entry with the latest creation time
    NewestFirst,
}

impl EvictionPolicy {
    pub const ALL: [EvictionPolicy; 3] = [
        EvictionPolicy::Reject,
        EvictionPolicy::OldestFirst,
        EvictionPolicy::NewestFirst,
    ];

    /// Configuration name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Reject => "REJECT",
            EvictionPolicy::OldestFirst => "OLDEST_FIRST",
            EvictionPolicy::NewestFirst => "NEWEST_FIRST",
        }
    }

    // == Select Victim ==
    /// Picks the key to evict from `entries`, or `None` if nothing may go.
    ///
    /// When several entries are expired, or several share the extremal
    /// creation time, whichever is met first in iteration order is chosen.
    pub fn select_victim<'a, I>(&self, entries: I, now_ms: u64) -> Option<&'a str>
    where
        I: IntoIterator<Item = (&'a String, &'a CacheEntry)>,
    {
        match self {
            EvictionPolicy::Reject => entries
                .into_iter()
                .find(|(_, entry)| entry.is_expired_at(now_ms))
                .map(|(key, _)| key.as_str()),
            EvictionPolicy::OldestFirst => {
                expired_or_extreme(entries, now_ms, |candidate, best| candidate < best)
            }
            EvictionPolicy::NewestFirst => {
                expired_or_extreme(entries, now_ms, |candidate, best| candidate > best)
            }
        }
    }
}

/// Returns the first expired key, else the key whose creation time wins
/// `prefer` against every other entry.
fn expired_or_extreme<'a, I, F>(entries: I, now_ms: u64, prefer: F) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a String, &'a CacheEntry)>,
    F: Fn(u64, u64) -> bool,
{
    let mut best: Option<(&'a str, u64)> = None;

    for (key, entry) in entries {
        if entry.is_expired_at(now_ms) {
            return Some(key.as_str());
        }
        match best {
            Some((_, best_at)) if !prefer(entry.created_at, best_at) => {}
            _ => best = Some((key.as_str(), entry.created_at)),
        }
    }

    best.map(|(key, _)| key)
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        EvictionPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str() == name)
            .ok_or_else(|| {
                CacheError::Configuration(format!(
                    "unknown eviction policy '{}', expected one of REJECT, OLDEST_FIRST, NEWEST_FIRST",
                    name
                ))
            })
    }
}
