//! Page Entry Module
//!
//! Defines the structure for a single cached rendered page.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Page Entry ==
/// A rendered HTML document together with its cache metadata.
///
/// Every entry carries an expiry; an entry past its expiry must never be
/// served, regardless of whether the background sweeper has run yet.
#[derive(Debug, Clone)]
pub struct PageEntry {
    /// The rendered HTML document
    pub html: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl PageEntry {
    // == Constructor ==
    /// Creates a new page entry expiring `ttl` from now.
    pub fn new(html: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();

        Self {
            html,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a page becomes
    /// unservable the instant its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
