//! Request DTOs for the cache server API
//!
//! The object itself travels as the raw JSON body; only the TTL arrives
//! through the query string.

use serde::Deserialize;

/// Query parameters for POST/PUT `/object/{key}`
///
/// `ttl` is optional. Absent means the server default, `0` means the object
/// never expires.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetQuery {
    /// TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_query_without_ttl() {
        let query: SetQuery = serde_json::from_str("{}").unwrap();
        assert!(query.ttl.is_none());
    }

    #[test]
    fn test_set_query_zero_ttl_is_kept() {
        let query: SetQuery = serde_json::from_str(r#"{"ttl": 0}"#).unwrap();
        assert_eq!(query.ttl, Some(0));
    }

    #[test]
    fn test_set_query_rejects_negative_ttl() {
        assert!(serde_json::from_str::<SetQuery>(r#"{"ttl": -5}"#).is_err());
    }
}
