//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_object, get_object, health_handler, put_object, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /object/:key` - Retrieve the object stored at a key
/// - `POST /object/:key` and `PUT /object/:key` - Store an object (`?ttl=` optional)
/// - `DELETE /object/:key` - Delete an object
/// - `GET /stats` - Cache statistics and configuration
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/object/:key",
            get(get_object)
                .post(put_object)
                .put(put_object)
                .delete(delete_object),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
