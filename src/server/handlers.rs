//! Server Handlers
//!
//! The page handler that drives resolve-then-render, plus diagnostics
//! handlers for health and cache statistics.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::PageCache;
use crate::config::Config;
use crate::models::{HealthResponse, StatsResponse};
use crate::render::{
    BasicErrorPage, CacheKey, ErrorRenderer, PageRenderer, RenderGate, ShellRenderer,
};
use crate::routing::RouteTable;
use crate::server::fallback::{FallbackHandler, NotFoundFallback};

/// Application state shared across all handlers.
///
/// Everything is constructed once at startup and injected: the cache (also
/// shared with the expiry sweeper), the render gate over it, the route
/// table, and the collaborator seams. Tests build independent instances
/// with small capacities and TTLs.
#[derive(Clone)]
pub struct AppState {
    /// Ordered route rules, immutable after startup
    pub routes: Arc<RouteTable>,
    /// Cache-backed render gate
    pub gate: Arc<RenderGate>,
    /// Shared page cache; the gate is its only writer
    pub cache: Arc<RwLock<PageCache>>,
    /// Page renderer, also owns the startup preparation step
    pub renderer: Arc<dyn PageRenderer>,
    /// Handler for requests outside the route table
    pub fallback: Arc<dyn FallbackHandler>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        cache: PageCache,
        routes: RouteTable,
        renderer: Arc<dyn PageRenderer>,
        error_renderer: Arc<dyn ErrorRenderer>,
        fallback: Arc<dyn FallbackHandler>,
    ) -> Self {
        let cache = Arc::new(RwLock::new(cache));
        let gate = Arc::new(RenderGate::new(
            cache.clone(),
            renderer.clone(),
            error_renderer,
        ));

        Self {
            routes: Arc::new(routes),
            gate,
            cache,
            renderer,
            fallback,
        }
    }

    /// Creates a new AppState from configuration, with the default
    /// renderer, error page, and fallback.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PageCache::new(config.max_pages, config.page_ttl),
            RouteTable::site_defaults(),
            Arc::new(ShellRenderer::new()),
            Arc::new(BasicErrorPage),
            Arc::new(NotFoundFallback),
        )
    }
}

/// Handler for every request the router itself does not claim.
///
/// GET requests whose path resolves against the route table go through the
/// render gate, keyed by path plus query string. Everything else - other
/// methods, unresolved paths - is forwarded to the fallback collaborator
/// exactly once, with no cache interaction.
pub async fn page_handler(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::GET {
        return state.fallback.handle(request).await;
    }

    let path = request.uri().path().to_string();
    match state.routes.resolve(&path) {
        Some(resolution) => {
            let key = CacheKey::from_parts(&path, request.uri().query());
            state
                .gate
                .obtain(&key, &resolution.template, &resolution.params)
                .await
                .into_response()
        }
        None => state.fallback.handle(request).await,
    }
}

/// Handler for GET /cache/stats
///
/// Returns current page cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.cached_pages,
    ))
}

/// Handler for GET /healthz
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::StatusCode;

    fn test_state() -> AppState {
        AppState::new(
            PageCache::new(100, Duration::from_secs(300)),
            RouteTable::site_defaults(),
            Arc::new(ShellRenderer::new()),
            Arc::new(BasicErrorPage),
            Arc::new(NotFoundFallback),
        )
    }

    fn get(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_page_handler_renders_declared_route() {
        let state = test_state();

        let response = page_handler(State(state), get("/news/42")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_page_handler_forwards_unknown_path() {
        let state = test_state();

        let response = page_handler(State(state.clone()), get("/no/such/page")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // The fallback path never touches the cache
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_page_handler_forwards_non_get() {
        let state = test_state();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/news/42")
            .body(Body::empty())
            .unwrap();

        let response = page_handler(State(state), request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats_handler_counts_gate_traffic() {
        let state = test_state();

        page_handler(State(state.clone()), get("/news/42")).await; // miss
        page_handler(State(state.clone()), get("/news/42")).await; // hit

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.cached_pages, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
