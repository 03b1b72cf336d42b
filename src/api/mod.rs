//! API Module
//!
//! HTTP handlers and routing for the library REST API.
//!
//! # Endpoints
//! - `GET|POST|DELETE /books`, `GET|PUT|DELETE /books/:id`
//! - `GET|POST|DELETE /readers`, `GET|PUT|DELETE /readers/:id`
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Drop every cached entry
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod resource;
pub mod routes;

pub use handlers::*;
pub use resource::{CachedValue, Resource};
pub use routes::create_router;
