//! Render Cache Gate
//!
//! Serves rendered pages through the cache: a hit returns stored HTML, a
//! miss renders through the collaborator and stores the result, a render
//! failure becomes an error page and caches nothing.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::cache::PageCache;
use crate::render::{CacheKey, ErrorRenderer, PageRenderer};

// == Rendered Page ==
/// What the gate hands back to the HTTP layer: the HTML document and the
/// status it should be served with.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// The HTML document to send
    pub html: String,
    /// 200 for a rendered or cached page, 500 for an error page
    pub status: StatusCode,
}

impl RenderedPage {
    fn page(html: String) -> Self {
        Self {
            html,
            status: StatusCode::OK,
        }
    }

    fn error_page(html: String) -> Self {
        Self {
            html,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

// == Render Gate ==
/// Cache-backed gate in front of the page renderer.
///
/// The cache instance is injected at construction and shared with the
/// expiry sweeper; nothing else writes to it. Lookups and inserts each
/// take the lock briefly and never hold it across the render await, so
/// two requests missing on the same key both render (duplicate work is
/// tolerated) and the stored entry is always one complete render.
pub struct RenderGate {
    cache: Arc<RwLock<PageCache>>,
    renderer: Arc<dyn PageRenderer>,
    error_renderer: Arc<dyn ErrorRenderer>,
}

impl RenderGate {
    // == Constructor ==
    /// Creates a gate over the given cache and collaborators.
    pub fn new(
        cache: Arc<RwLock<PageCache>>,
        renderer: Arc<dyn PageRenderer>,
        error_renderer: Arc<dyn ErrorRenderer>,
    ) -> Self {
        Self {
            cache,
            renderer,
            error_renderer,
        }
    }

    // == Obtain ==
    /// Returns the page for `key`, rendering it if the cache cannot serve it.
    ///
    /// On a hit the stored HTML is returned as-is. On a miss the renderer
    /// runs; success stores the HTML under `key` (overwriting and resetting
    /// its expiry) and returns it, failure is forwarded to the error
    /// renderer and nothing is stored, so the next request for `key`
    /// renders again instead of serving a poisoned entry.
    pub async fn obtain(
        &self,
        key: &CacheKey,
        template: &str,
        params: &HashMap<String, String>,
    ) -> RenderedPage {
        {
            let mut cache = self.cache.write().await;
            if let Some(html) = cache.get(key.as_str()) {
                info!("cache hit: {key}");
                return RenderedPage::page(html);
            }
        }

        info!("cache miss: {key}");

        match self.renderer.render(template, params).await {
            Ok(html) => {
                let mut cache = self.cache.write().await;
                cache.insert(key.as_str().to_string(), html.clone());
                RenderedPage::page(html)
            }
            Err(error) => {
                warn!("render failed for {key}: {error}");
                let html = self
                    .error_renderer
                    .render_error(&error, template, params)
                    .await;
                RenderedPage::error_page(html)
            }
        }
    }
}
