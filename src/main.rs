//! SSR Cache - A server-side rendering front end with an LRU page cache
//!
//! Maps URL routes to page templates and caches rendered HTML in a bounded
//! in-memory store with TTL expiration and LRU eviction.

mod cache;
mod config;
mod error;
mod models;
mod render;
mod routing;
mod server;
mod tasks;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use server::{create_router, AppState};
use tasks::spawn_expiry_sweeper;

/// Main entry point for the rendering front end.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the page cache, route table, and render gate
/// 4. Run the renderer's asynchronous preparation step (fatal on failure)
/// 5. Start the background expiry sweeper
/// 6. Bind and serve; a listen failure is fatal and not retried
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssr_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SSR front end");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: max_pages={}, page_ttl={:?}, port={}, production={}, cleanup_interval={}s",
        config.max_pages, config.page_ttl, config.port, config.production, config.cleanup_interval
    );

    // Create application state with cache, route table, and render gate
    let state = AppState::from_config(&config);
    info!(
        "Page cache initialized, {} route rules declared",
        state.routes.len()
    );

    // The renderer must finish preparing before we accept connections
    state
        .renderer
        .prepare()
        .await
        .context("renderer preparation failed")?;
    info!("Renderer prepared");

    // Start background expiry sweeper
    let sweeper_handle = spawn_expiry_sweeper(state.cache.clone(), config.cleanup_interval);
    info!("Background expiry sweeper started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port; failure here (e.g. port already bound) is fatal
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper task and allows graceful shutdown.
async fn shutdown_signal(sweeper_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweeper task
    sweeper_handle.abort();
    warn!("Expiry sweeper aborted");
}
