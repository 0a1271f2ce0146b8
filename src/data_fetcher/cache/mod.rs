//! Time-bounded memoization of directory service responses.
//!
//! Two LRU caches, one keyed by the exact search query string and one keyed
//! by course id. They are the only cross-interaction shared state in the
//! application; entries expire after the one-hour memoization window.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::constants::{cache_capacity, cache_ttl};
use crate::data_fetcher::models::CourseId;

mod types;

pub use types::CachedPayload;

// The search cache key is the exact query string: case-sensitive, not
// trimmed here beyond whatever the caller already trimmed.
static SEARCH_CACHE: LazyLock<RwLock<LruCache<String, CachedPayload>>> = LazyLock::new(|| {
    RwLock::new(LruCache::new(
        NonZeroUsize::new(cache_capacity::SEARCH_RESULTS).unwrap(),
    ))
});

static DETAIL_CACHE: LazyLock<RwLock<LruCache<String, CachedPayload>>> = LazyLock::new(|| {
    RwLock::new(LruCache::new(
        NonZeroUsize::new(cache_capacity::COURSE_DETAILS).unwrap(),
    ))
});

/// Memoizes a search payload under the exact query string.
#[instrument(skip(payload))]
pub async fn cache_search_results(query: &str, payload: Value) {
    let entry = CachedPayload::new(payload, cache_ttl::SEARCH_RESULTS_SECONDS);
    let mut cache = SEARCH_CACHE.write().await;
    cache.put(query.to_string(), entry);
    debug!("Cached search results: query={query}");
}

/// Returns the memoized search payload for the query, if still fresh.
pub async fn get_cached_search_results(query: &str) -> Option<Value> {
    let mut cache = SEARCH_CACHE.write().await;
    match cache.get(query) {
        Some(entry) if !entry.is_expired() => {
            debug!("Search cache hit: query={query}");
            Some(entry.data.clone())
        }
        Some(_) => {
            debug!("Removing expired search cache entry: query={query}");
            cache.pop(query);
            None
        }
        None => {
            debug!("Search cache miss: query={query}");
            None
        }
    }
}

/// Memoizes a course detail payload under the course id.
#[instrument(skip(payload))]
pub async fn cache_course_detail(id: &CourseId, payload: Value) {
    let entry = CachedPayload::new(payload, cache_ttl::COURSE_DETAIL_SECONDS);
    let mut cache = DETAIL_CACHE.write().await;
    cache.put(id.cache_key(), entry);
    debug!("Cached course detail: id={id}");
}

/// Returns the memoized detail payload for the course id, if still fresh.
pub async fn get_cached_course_detail(id: &CourseId) -> Option<Value> {
    let mut cache = DETAIL_CACHE.write().await;
    let key = id.cache_key();
    match cache.get(&key) {
        Some(entry) if !entry.is_expired() => {
            debug!("Detail cache hit: id={id}");
            Some(entry.data.clone())
        }
        Some(_) => {
            debug!("Removing expired detail cache entry: id={id}");
            cache.pop(&key);
            None
        }
        None => {
            debug!("Detail cache miss: id={id}");
            None
        }
    }
}

/// Size and capacity of one cache, for monitoring and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheInfo {
    pub size: usize,
    pub capacity: usize,
}

/// Snapshot of both caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub search_cache: CacheInfo,
    pub detail_cache: CacheInfo,
}

/// Gets current size and capacity of both caches.
pub async fn get_all_cache_stats() -> CacheStats {
    let search = SEARCH_CACHE.read().await;
    let detail = DETAIL_CACHE.read().await;
    CacheStats {
        search_cache: CacheInfo {
            size: search.len(),
            capacity: search.cap().get(),
        },
        detail_cache: CacheInfo {
            size: detail.len(),
            capacity: detail.cap().get(),
        },
    }
}

/// Clears all cache entries. Used by tests that need a cold cache.
pub async fn clear_all_caches() {
    SEARCH_CACHE.write().await.clear();
    DETAIL_CACHE.write().await.clear();
    debug!("All caches cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_search_cache_roundtrip_is_exact_and_case_sensitive() {
        clear_all_caches().await;

        cache_search_results("Prairie Green", json!([{"id": 1}])).await;

        assert_eq!(
            get_cached_search_results("Prairie Green").await,
            Some(json!([{"id": 1}]))
        );
        assert_eq!(get_cached_search_results("prairie green").await, None);
        assert_eq!(get_cached_search_results("Prairie Green ").await, None);

        clear_all_caches().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_detail_cache_keys_are_type_preserving() {
        clear_all_caches().await;

        let numeric = CourseId::Number(42);
        let text = CourseId::Text("42".to_string());
        cache_course_detail(&numeric, json!({"id": 42})).await;

        assert_eq!(
            get_cached_course_detail(&numeric).await,
            Some(json!({"id": 42}))
        );
        assert_eq!(get_cached_course_detail(&text).await, None);

        clear_all_caches().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_cache_stats_reflect_usage() {
        clear_all_caches().await;

        let stats = get_all_cache_stats().await;
        assert_eq!(stats.search_cache.size, 0);
        assert_eq!(stats.detail_cache.size, 0);

        cache_search_results("a", json!([])).await;
        cache_course_detail(&CourseId::Number(1), json!({})).await;

        let stats = get_all_cache_stats().await;
        assert_eq!(stats.search_cache.size, 1);
        assert_eq!(stats.detail_cache.size, 1);
        assert_eq!(
            stats.search_cache.capacity,
            cache_capacity::SEARCH_RESULTS
        );

        clear_all_caches().await;
    }
}
