//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired pages from the cache.
//! Lookups already refuse to serve expired pages; the sweeper only
//! reclaims the memory of pages nobody asked for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PageCache;

/// Spawns a background task that periodically sweeps expired pages.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It takes a write lock on the cache only for the sweep
/// itself.
///
/// # Arguments
/// * `cache` - Shared reference to the page cache
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_expiry_sweeper(
    cache: Arc<RwLock<PageCache>>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweeper with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} stale pages", removed);
            } else {
                debug!("Expiry sweep: no stale pages found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweeper_removes_expired_pages() {
        let cache = Arc::new(RwLock::new(PageCache::new(
            100,
            Duration::from_millis(100),
        )));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.insert("/stale".to_string(), "<html></html>".to_string());
        }

        let handle = spawn_expiry_sweeper(cache.clone(), 1);

        // Wait for the page to expire and the sweeper to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert!(
                cache_guard.is_empty(),
                "Expired page should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_valid_pages() {
        let cache = Arc::new(RwLock::new(PageCache::new(100, Duration::from_secs(3600))));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.insert("/fresh".to_string(), "<html></html>".to_string());
        }

        let handle = spawn_expiry_sweeper(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let cache_guard = cache.read().await;
            assert!(cache_guard.contains("/fresh"), "Valid page should survive");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let cache = Arc::new(RwLock::new(PageCache::new(100, Duration::from_secs(300))));

        let handle = spawn_expiry_sweeper(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
