//! Course directory operations: search and detail lookup.
//!
//! One authenticated read per distinct input, memoized for an hour. Detail
//! lookups prefer whatever the search payload already embedded, then the
//! memoized copy, and only then the network.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::cache::{
    cache_course_detail, cache_search_results, get_cached_course_detail,
    get_cached_search_results,
};
use crate::data_fetcher::models::CourseId;
use crate::data_fetcher::projector::course_entries;
use crate::error::AppError;

// Import from sibling modules
use super::fetch_utils::fetch_value;
use super::urls::{build_detail_urls, build_search_url};

/// Field spellings whose presence marks a search entry as carrying full detail.
const DETAIL_FIELD_NAMES: [&str; 3] = ["tees", "teeBoxes", "holes"];

/// Searches the directory for courses matching the query string.
///
/// The raw decoded payload is returned without interpreting its top-level
/// shape; the projector handles both observed shapes. Results are memoized
/// for an hour under the exact query string, so an identical repeated search
/// inside that window issues no network call. An empty query is passed
/// through to the service un-validated.
#[instrument(skip(client, config))]
pub async fn search_courses(
    client: &Client,
    config: &Config,
    query: &str,
) -> Result<Value, AppError> {
    if let Some(cached) = get_cached_search_results(query).await {
        info!("Using memoized search results for query: {query}");
        return Ok(cached);
    }

    let url = build_search_url(&config.api_domain, config.api_shape, query)?;
    let payload = fetch_value(client, &url, &config.api_key).await?;

    cache_search_results(query, payload.clone()).await;
    Ok(payload)
}

/// Fetches full detail for one course id over the network.
///
/// The configured endpoint shape decides the URL: the primary detail URL is
/// tried first, and an HTTP-level rejection (non-2xx) triggers exactly one
/// attempt on the shape's secondary URL when it has one. A transport failure
/// propagates immediately, since the alternate URL shape targets the same
/// unreachable host. Memoized per id for an hour.
#[instrument(skip(client, config))]
pub async fn fetch_course_detail(
    client: &Client,
    config: &Config,
    id: &CourseId,
) -> Result<Value, AppError> {
    if let Some(cached) = get_cached_course_detail(id).await {
        info!("Using memoized course detail for id: {id}");
        return Ok(cached);
    }

    let (primary_url, secondary_url) = build_detail_urls(&config.api_domain, config.api_shape, id)?;

    let payload = match fetch_value(client, &primary_url, &config.api_key).await {
        Ok(payload) => payload,
        Err(e) if e.is_rejected_request() => match secondary_url {
            Some(secondary_url) => {
                warn!(
                    "Primary detail endpoint rejected request ({e}), trying alternate shape: {secondary_url}"
                );
                fetch_value(client, &secondary_url, &config.api_key).await?
            }
            None => return Err(e),
        },
        Err(e) => return Err(e),
    };

    cache_course_detail(id, payload.clone()).await;
    Ok(payload)
}

/// Finds detail already embedded in a search payload for the given id.
///
/// First match wins, by type-preserving id equality; an entry only counts
/// when it actually carries tee or hole data, not just the summary fields.
pub fn embedded_detail<'a>(payload: &'a Value, id: &CourseId) -> Option<&'a Value> {
    course_entries(payload).iter().find(|entry| {
        entry
            .get("id")
            .is_some_and(|entry_id| id.matches_value(entry_id))
            && DETAIL_FIELD_NAMES
                .iter()
                .any(|field| entry.get(*field).is_some_and(|v| !v.is_null()))
    })
}

/// Resolves course detail for a selected id: the search payload's embedded
/// copy first, the memoized or freshly fetched detail second.
pub async fn course_detail(
    client: &Client,
    config: &Config,
    id: &CourseId,
    search_payload: Option<&Value>,
) -> Result<Value, AppError> {
    if let Some(embedded) = search_payload.and_then(|payload| embedded_detail(payload, id)) {
        debug!("Search payload already embeds detail for id: {id}");
        return Ok(embedded.clone());
    }

    fetch_course_detail(client, config, id).await
}
