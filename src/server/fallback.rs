//! Fallback Handler
//!
//! Collaborator seam for requests the route table does not claim: static
//! assets, API routes, client-navigation payloads. The rendering front
//! end forwards such requests here untouched, with no cache interaction.

use async_trait::async_trait;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

// == Fallback Handler ==
/// Handles every request that did not resolve to a page route.
#[async_trait]
pub trait FallbackHandler: Send + Sync {
    /// Produces the response for an unrouted request.
    async fn handle(&self, request: Request) -> Response;
}

// == Not Found Fallback ==
/// Default fallback: answers 404 for everything.
///
/// A deployment fronting a real asset pipeline would swap in its own
/// [`FallbackHandler`] here.
#[derive(Debug, Default)]
pub struct NotFoundFallback;

#[async_trait]
impl FallbackHandler for NotFoundFallback {
    async fn handle(&self, request: Request) -> Response {
        debug!(
            "falling through: {} {}",
            request.method(),
            request.uri().path()
        );
        StatusCode::NOT_FOUND.into_response()
    }
}
