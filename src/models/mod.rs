//! Response models for the diagnostics endpoints
//!
//! Pages themselves are served as HTML; only the health and statistics
//! endpoints speak JSON.

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
