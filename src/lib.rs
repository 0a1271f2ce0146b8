//! Golf Course Finder Library
//!
//! This library provides functionality for searching the GolfCourseAPI
//! course directory and projecting its loosely structured responses into
//! flat tables: course summaries, tee-box sets, and hole-by-hole layouts.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fairway_finder::config::Config;
//! use fairway_finder::data_fetcher::api::{create_http_client_with_timeout, search_courses};
//! use fairway_finder::data_fetcher::projector::project_summaries;
//! use fairway_finder::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Search the directory and list the matches
//!     let payload = search_courses(&client, &config, "Prairie Green").await?;
//!     for course in project_summaries(&payload) {
//!         println!("{}: {}", course.id, course.label);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{ApiShape, Config};
pub use data_fetcher::api::{course_detail, fetch_course_detail, search_courses};
pub use data_fetcher::models::{
    CourseId, CourseSummary, HoleRow, TeePresence, TeeProjection, TeeRow,
};
pub use data_fetcher::projector::{display_label, project_holes, project_summaries, project_tees};
pub use error::AppError;
pub use ui::{FinderPage, SearchSession};

// Re-export cache monitoring functions for external tools
pub use data_fetcher::cache::{CacheInfo, CacheStats, clear_all_caches, get_all_cache_stats};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
