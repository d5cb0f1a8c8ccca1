//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::{EvictionPolicy, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, MessageResponse, SetQuery, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the single cache engine
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache handle.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with an engine sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SharedCache::new(
            config.number_of_slots,
            config.time_to_live,
            config.eviction_policy,
        ))
    }

    /// Shorthand used by tests and embedders.
    pub fn with_params(capacity: i64, default_ttl: i64, policy: EvictionPolicy) -> Self {
        Self::new(SharedCache::new(capacity, default_ttl, policy))
    }
}

/// Handler for GET /object/:key
///
/// Returns the stored object exactly as it was submitted.
pub async fn get_object(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    let entry = state.cache.get(&key).await?;

    let object = serde_json::from_str(&entry.payload).map_err(|err| {
        error!(%key, %err, "stored payload is not valid JSON");
        CacheError::Internal(format!("corrupt payload at {}", key))
    })?;

    Ok(Json(object))
}

/// Handler for POST and PUT /object/:key
///
/// Stores the JSON body under `key`, optionally with `?ttl=<seconds>`.
///
/// A malformed query string or body is reported as
/// [`CacheError::InvalidRequest`] so the client gets the usual JSON error.
pub async fn put_object(
    State(state): State<AppState>,
    Path(key): Path<String>,
    query: std::result::Result<Query<SetQuery>, QueryRejection>,
    object: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Query(query) = query?;
    let Json(object) = object?;
    let payload = object.to_string();
    debug!(%key, ttl = ?query.ttl, bytes = payload.len(), "storing object");

    state.cache.set(key, payload, query.ttl).await?;

    Ok(Json(MessageResponse::success()))
}

/// Handler for DELETE /object/:key
pub async fn delete_object(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.cache.delete(&key).await?;

    Ok(Json(MessageResponse::success()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = &state.cache;
    let stats = cache.stats().await;

    Json(StatsResponse::new(
        &stats,
        cache.capacity(),
        cache.default_ttl(),
        cache.policy(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
