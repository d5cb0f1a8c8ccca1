//! API Module
//!
//! HTTP handlers and routing that translate requests into cache engine calls.
//!
//! # Endpoints
//! - `GET /object/:key` - Retrieve an object
//! - `POST|PUT /object/:key` - Store an object, optional `?ttl=<seconds>`
//! - `DELETE /object/:key` - Delete an object
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
