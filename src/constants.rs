//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 20;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default directory service base URL
pub const DEFAULT_API_DOMAIN: &str = "https://api.golfcourseapi.com";

/// Sample course name prefilled in the search input
pub const DEFAULT_SEARCH_QUERY: &str = "Prairie Green";

/// Maximum number of characters of a rejected response body kept for diagnostics
pub const BODY_EXCERPT_MAX_CHARS: usize = 200;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for search results keyed by the exact query string (1 hour)
    pub const SEARCH_RESULTS_SECONDS: u64 = 3600;

    /// TTL for course detail payloads keyed by course id (1 hour)
    pub const COURSE_DETAIL_SECONDS: u64 = 3600;
}

/// Cache capacities (entry counts) for the LRU caches
pub mod cache_capacity {
    /// Distinct search queries kept in memory
    pub const SEARCH_RESULTS: usize = 50;

    /// Distinct course details kept in memory
    pub const COURSE_DETAILS: usize = 100;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Widest a single table column is allowed to grow
    pub const MAX_COLUMN_WIDTH: usize = 24;

    /// Maximum result rows shown before the list is windowed around the selection
    pub const MAX_VISIBLE_RESULTS: usize = 15;

    /// Keyboard polling interval in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 100;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "GOLF_API_DOMAIN";

    /// Environment variable holding the directory service credential.
    /// Same name the service's own documentation uses, so an existing key works as-is.
    pub const API_KEY: &str = "GOLFCOURSEAPI_KEY";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "GOLF_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "GOLF_HTTP_TIMEOUT";

    /// Environment variable for endpoint shape override ("courses" or "v1")
    pub const API_SHAPE: &str = "GOLF_API_SHAPE";
}
