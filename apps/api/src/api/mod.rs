// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{health, teapots};
pub use state::AppState;

/// Builds the application router
///
/// Collection routes answer with and without the trailing slash.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Teapot routes
        .route(
            "/teapots",
            get(teapots::list_teapots).post(teapots::create_teapot),
        )
        .route(
            "/teapots/",
            get(teapots::list_teapots).post(teapots::create_teapot),
        )
        .route("/teapots/count", get(teapots::count_teapots))
        .route("/teapots/reset", post(teapots::reset_teapots))
        .route(
            "/teapots/:id",
            get(teapots::get_teapot)
                .put(teapots::update_teapot)
                .delete(teapots::delete_teapot),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
