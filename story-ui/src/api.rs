//! Typed client for the Story Forge backend API.
//!
//! One async function per endpoint, JSON in/out over `gloo_net`. All
//! requests are fire-and-await: no retries, no timeouts, no de-duplication —
//! when callers overlap, the last response to resolve wins.

use gloo_net::http::{Request, Response};
use std::sync::OnceLock;
use thiserror::Error;

use story_types::{
    parse_generate_response, GenerateOutcome, GenerateStoryRequest, SaveStoryRequest, StoryFilters,
    StoryVersion, UpdateStoryRequest,
};

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Failure taxonomy for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The fetch itself rejected (network/transport).
    #[error("request failed: {0}")]
    Transport(String),
    /// The request body could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
    /// Non-2xx response; `detail` carries the backend's message when the
    /// body had one.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },
    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Mine a non-2xx response body for a human-readable message. The backend
/// sends FastAPI-style `{"detail": ...}`; fall back to `error`/`message`
/// keys or the raw body.
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let detail = if body.trim().is_empty() {
        "no error detail".to_string()
    } else if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        json.get("detail")
            .or_else(|| json.get("error"))
            .or_else(|| json.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(body)
    } else {
        body
    };

    ApiError::Http { status, detail }
}

fn encode_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw)
        .as_string()
        .unwrap_or_else(|| raw.to_string())
}

fn encode_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `GET /stories` with only the present filter fields in the query string.
pub async fn fetch_stories(filters: &StoryFilters) -> Result<Vec<StoryVersion>, ApiError> {
    let mut url = format!("{}/stories", api_base());
    let query = encode_query(&filters.query_pairs());
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /version-history?storyId=<id>` — every version in the group
/// containing `story_id`, in backend order.
pub async fn fetch_version_history(story_id: i64) -> Result<Vec<StoryVersion>, ApiError> {
    let url = format!("{}/version-history?storyId={story_id}", api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /update-story`. The backend returns the resulting version record.
pub async fn update_story(request: &UpdateStoryRequest) -> Result<StoryVersion, ApiError> {
    let url = format!("{}/update-story", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /save-story` — first persist of a generated story.
pub async fn save_story(request: &SaveStoryRequest) -> Result<StoryVersion, ApiError> {
    let url = format!("{}/save-story", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `DELETE /delete-version/{id}` — removes one version of a group.
pub async fn delete_version(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/delete-version/{id}", api_base());

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    Ok(())
}

/// `DELETE /delete-story/{id}` — removes one story outside the
/// version-group flow.
pub async fn delete_story(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/delete-story/{id}", api_base());

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    Ok(())
}

/// `POST /generate-story`. The response is plain text (or a questions JSON
/// object), parsed by `story_types::parse_generate_response`.
pub async fn generate_story(request: &GenerateStoryRequest) -> Result<GenerateOutcome, ApiError> {
    let url = format!("{}/generate-story", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(http_error(response).await);
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(parse_generate_response(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_types::{SortField, SortOrder, StoryStatus};

    #[test]
    fn query_encoding_joins_pairs_in_order() {
        let filters = StoryFilters {
            genre: "Fantasy".to_string(),
            title: String::new(),
            status: None,
            sort_by: SortField::Title,
            order: SortOrder::Asc,
        };
        // encode_uri_component is unavailable off-wasm; the pair list is the
        // contract the URL is built from.
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("genre", "Fantasy".to_string()),
                ("sort_by", "title".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn http_errors_render_status_and_detail() {
        let err = ApiError::Http {
            status: 404,
            detail: "Story not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Story not found");
    }

    #[test]
    fn status_filter_uses_wire_strings() {
        let filters = StoryFilters {
            status: Some(StoryStatus::Completed),
            ..StoryFilters::default()
        };
        assert!(filters
            .query_pairs()
            .contains(&("status", "completed".to_string())));
    }
}
