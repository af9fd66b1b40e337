//! SSR Cache - A server-side rendering front end with an LRU page cache
//!
//! Maps URL routes to page templates and caches rendered HTML in a bounded
//! in-memory store with TTL expiration and LRU eviction.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routing;
pub mod server;
pub mod tasks;

pub use config::Config;
pub use server::AppState;
pub use tasks::spawn_expiry_sweeper;
