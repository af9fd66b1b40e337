//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Page TTL applied in development mode (effectively no caching).
const DEV_PAGE_TTL_MS: u64 = 5;

/// Page TTL applied in production mode: one hour.
const PROD_PAGE_TTL_MS: u64 = 1000 * 60 * 60;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The page TTL default depends on whether the process runs in production mode.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listening port
    pub port: u16,
    /// Whether the process runs in production mode
    pub production: bool,
    /// Maximum number of rendered pages the cache can hold
    pub max_pages: usize,
    /// How long a cached page stays servable
    pub page_ttl: Duration,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP listening port (default: 3000)
    /// - `APP_ENV` - `production` enables production cache sizing; anything
    ///   else (or unset) means development
    /// - `MAX_PAGES` - Maximum cached pages (default: 100)
    /// - `PAGE_TTL_MS` - Page TTL in milliseconds; overrides the per-mode
    ///   default (development: 5 ms, production: 1 hour)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let default_ttl_ms = if production {
            PROD_PAGE_TTL_MS
        } else {
            DEV_PAGE_TTL_MS
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            production,
            max_pages: env::var("MAX_PAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            page_ttl: Duration::from_millis(
                env::var("PAGE_TTL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(default_ttl_ms),
            ),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            production: false,
            max_pages: 100,
            page_ttl: Duration::from_millis(DEV_PAGE_TTL_MS),
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert!(!config.production);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.page_ttl, Duration::from_millis(5));
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("PORT");
        env::remove_var("APP_ENV");
        env::remove_var("MAX_PAGES");
        env::remove_var("PAGE_TTL_MS");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.port, 3000);
        assert!(!config.production);
        assert_eq!(config.max_pages, 100);
        assert_eq!(config.page_ttl, Duration::from_millis(DEV_PAGE_TTL_MS));
        assert_eq!(config.cleanup_interval, 60);
    }
}
