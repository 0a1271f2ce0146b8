//! Single-attempt authenticated HTTP fetching with failure classification.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::constants::BODY_EXCERPT_MAX_CHARS;
use crate::error::AppError;

/// Fetches one URL and decodes the body as JSON.
///
/// Exactly one attempt: a transport failure (timeout, connection failure)
/// and an HTTP-level rejection (non-2xx) surface as distinct error kinds so
/// the caller can decide on fallback behavior; nothing is retried here.
/// The credential travels as `Authorization: Key <value>` on every request.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `api_key` - Directory service credential
///
/// # Returns
/// * `Result<Value, AppError>` - Decoded response body or classified error
#[instrument(skip(client, api_key))]
pub(super) async fn fetch_value(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client
        .get(url)
        .header(reqwest::header::AUTHORIZATION, format!("Key {api_key}"))
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        // Keep a short excerpt of the rejected body for diagnostics
        let excerpt: String = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(BODY_EXCERPT_MAX_CHARS)
            .collect();

        error!("HTTP {} (URL: {}): {}", status_code, url, excerpt);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, excerpt, url),
            _ => AppError::api_server_error(status_code, excerpt, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        AppError::api_malformed_json(e.to_string(), url)
    })
}
