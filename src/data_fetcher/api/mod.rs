//! Query service for the course directory API.

mod courses;
mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use courses::{course_detail, embedded_detail, fetch_course_detail, search_courses};
pub use http_client::create_http_client_with_timeout;
