//! Fetching and normalization of course directory data.

pub mod api;
pub mod cache;
pub mod models;
pub mod projector;

pub use api::{course_detail, fetch_course_detail, search_courses};
pub use models::{CourseId, CourseSummary, HoleRow, TeePresence, TeeProjection, TeeRow};
pub use projector::{course_entries, display_label, project_holes, project_summaries, project_tees};
