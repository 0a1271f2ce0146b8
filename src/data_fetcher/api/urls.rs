//! URL building for the two observed endpoint shapes.

use reqwest::Url;

use crate::config::ApiShape;
use crate::data_fetcher::models::CourseId;
use crate::error::AppError;

fn base_url(domain: &str) -> Result<Url, AppError> {
    let with_scheme = if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };
    Url::parse(&with_scheme)
        .map_err(|e| AppError::config_error(format!("Invalid API domain '{domain}': {e}")))
}

/// Builds the search URL for the configured endpoint shape. The query string
/// is passed through exactly as the caller provided it; encoding is the only
/// transformation applied.
pub fn build_search_url(domain: &str, shape: ApiShape, query: &str) -> Result<String, AppError> {
    let mut url = base_url(domain)?;
    match shape {
        ApiShape::Courses => {
            url.set_path("courses");
            url.query_pairs_mut().append_pair("search", query);
        }
        ApiShape::V1 => {
            url.set_path("v1/search");
            url.query_pairs_mut().append_pair("search_query", query);
        }
    }
    Ok(url.to_string())
}

/// Builds the detail URL pair for the configured endpoint shape: the primary
/// URL and, where the shape has one, the secondary URL tried once after an
/// HTTP-level rejection of the primary.
pub fn build_detail_urls(
    domain: &str,
    shape: ApiShape,
    id: &CourseId,
) -> Result<(String, Option<String>), AppError> {
    match shape {
        ApiShape::Courses => {
            let mut url = base_url(domain)?;
            set_segments(&mut url, &["courses", &id.to_string()])?;
            Ok((url.to_string(), None))
        }
        ApiShape::V1 => {
            let mut primary = base_url(domain)?;
            primary.set_path("v1/course");
            primary.query_pairs_mut().append_pair("id", &id.to_string());

            let mut secondary = base_url(domain)?;
            set_segments(&mut secondary, &["v1", "courses", &id.to_string()])?;

            Ok((primary.to_string(), Some(secondary.to_string())))
        }
    }
}

fn set_segments(url: &mut Url, segments: &[&str]) -> Result<(), AppError> {
    let mut path = url
        .path_segments_mut()
        .map_err(|_| AppError::config_error("API domain cannot carry a path"))?;
    path.clear();
    path.extend(segments);
    Ok(())
}
