//! Cache data structures with TTL support

use serde_json::Value;
use std::time::{Duration, Instant};

/// One memoized response payload with its expiry window.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub data: Value,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedPayload {
    /// Creates a new cached payload entry
    pub fn new(data: Value, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    /// Checks if the cached payload has outlived its TTL
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > Duration::from_secs(self.ttl_seconds)
    }

    /// Gets the remaining time until expiration
    #[allow(dead_code)]
    pub fn time_until_expiry(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds).saturating_sub(self.cached_at.elapsed())
    }
}
