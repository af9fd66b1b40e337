//! Response DTOs for the diagnostics endpoints
//!
//! Defines the structure of the JSON bodies returned by the health and
//! cache statistics endpoints.

use serde::Serialize;

/// Response body for the statistics endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of pages served straight from the cache
    pub hits: u64,
    /// Number of lookups that required a fresh render
    pub misses: u64,
    /// Number of pages evicted by the LRU policy
    pub evictions: u64,
    /// Current number of cached pages
    pub cached_pages: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache counters
    pub fn new(hits: u64, misses: u64, evictions: u64, cached_pages: usize) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            cached_pages,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /healthz)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
