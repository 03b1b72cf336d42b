//! API Routes
//!
//! Configures the Axum router with all library endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, create_handler, delete_all_handler, delete_handler, get_handler,
    health_handler, list_handler, stats_handler, update_handler, AppState,
};
use super::resource::Resource;
use crate::models::{Book, Reader};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/books", resource_routes::<Book>())
        .nest("/readers", resource_routes::<Reader>())
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CRUD routes for one resource, mounted under its collection path.
fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .delete(delete_all_handler::<R>),
        )
        .route(
            "/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
}
