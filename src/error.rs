//! Error types for the cache service
//!
//! Every engine outcome other than success is one of these variants; the HTTP
//! layer maps them onto status codes.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine and its request layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is absent or its entry has expired
    #[error("Object at {0} is not found or expired")]
    NotFound(String),

    /// Cache is full and the eviction policy found no victim for this key
    #[error("The server has no storage")]
    StorageExhausted(String),

    /// Unusable configuration value (e.g. an unknown eviction policy name)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// HTTP status the request layer reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::StorageExhausted(_) => StatusCode::INSUFFICIENT_STORAGE,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Configuration(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == Extractor Rejections ==
impl From<QueryRejection> for CacheError {
    fn from(rejection: QueryRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "message": self.to_string()
        }));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
