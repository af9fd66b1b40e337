//! Server Routes
//!
//! Configures the axum router for the rendering front end.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, page_handler, stats_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `GET /healthz` - Health check endpoint
/// - `GET /cache/stats` - Page cache statistics
/// - everything else - page handler: resolve against the route table and
///   serve through the render gate, or forward to the fallback collaborator
///
/// # Middleware
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/cache/stats", get(stats_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
