//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::EvictionPolicy;
use crate::error::Result;

/// Server configuration parameters.
///
/// Numeric values are passed to the engine as given; non-positive slot counts
/// and TTLs are replaced with the engine defaults there.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of occupied slots
    pub number_of_slots: i64,
    /// Default TTL in seconds for writes without an explicit TTL
    pub time_to_live: i64,
    /// Eviction policy applied when the cache is full
    pub eviction_policy: EvictionPolicy,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NUMBER_OF_SLOTS` - Maximum cache slots (default: 10)
    /// - `TIME_TO_LIVE` - Default TTL in seconds (default: 60)
    /// - `EVICTION_POLICY` - `REJECT`, `OLDEST_FIRST` or `NEWEST_FIRST` (default: `REJECT`)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    ///
    /// # Errors
    /// Returns [`crate::error::CacheError::Configuration`] for an unknown
    /// eviction policy name. Unparseable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let eviction_policy = match lookup("EVICTION_POLICY") {
            Some(name) => name.trim().parse()?,
            None => defaults.eviction_policy,
        };

        Ok(Self {
            number_of_slots: parse_or(&lookup, "NUMBER_OF_SLOTS", defaults.number_of_slots),
            time_to_live: parse_or(&lookup, "TIME_TO_LIVE", defaults.time_to_live),
            eviction_policy,
            server_port: parse_or(&lookup, "SERVER_PORT", defaults.server_port),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_slots: 10,
            time_to_live: 60,
            eviction_policy: EvictionPolicy::Reject,
            server_port: 8080,
        }
    }
}
