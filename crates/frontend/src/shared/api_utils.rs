//! API utilities for talking to the MiningOS services
//!
//! Provides the base URL resolution and a JSON GET helper shared by every
//! data-fetching call in the frontend.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Port the MiningOS API listens on when no override is configured.
pub const API_PORT: u16 = 3000;

/// `<meta name="miningos-api-base" content="https://api.example.com">`
/// overrides the location-derived base URL.
pub const API_BASE_META: &str = "miningos-api-base";

/// Get the base URL for API requests
///
/// Uses the `miningos-api-base` meta tag when present, otherwise the current
/// window location with [`API_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Some(base) = window
        .document()
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|content| !content.trim().is_empty())
    {
        return base.trim().trim_end_matches('/').to_string();
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Join a base URL and an API path, tolerating a missing or doubled slash.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/features");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// GET a JSON document from the API.
pub async fn fetch_json<T>(path: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api/features"),
            "http://localhost:3000/api/features"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "api/pools"),
            "http://localhost:3000/api/pools"
        );
        assert_eq!(join_url("", "/api/pools"), "/api/pools");
    }
}
