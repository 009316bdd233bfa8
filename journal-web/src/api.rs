//! HTTP layer for the journal backend.
//!
//! Every backend call in the app goes through here. Endpoints follow the
//! backend contract: manuscripts CRUD plus the workflow catalog endpoints
//! (`state_names`, `valid_states`, `state_transitions`) and the people
//! directory lookups the dashboard needs.

use std::collections::HashMap;
use std::sync::OnceLock;

use gloo_net::http::Request;
use serde::Deserialize;

use journal_types::{Identity, Manuscript, ManuscriptAction, NewManuscript, Person, StateOption};

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

fn encode(component: &str) -> String {
    js_sys::encode_uri_component(component)
        .as_string()
        .unwrap_or_else(|| component.to_string())
}

// ============================================================================
// Error taxonomy
// ============================================================================

/// The two failure classes the UI must keep visually distinct: the request
/// never reached the server, or the server answered and rejected it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response received at all.
    Network(String),
    /// The server responded with an error; message is its `message` field
    /// when one exists, otherwise the status line.
    Server(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Server(msg) => write!(f, "API error: {msg}"),
        }
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("failed to reach server ({err})"))
}

/// Pull the backend's `message` field out of an error body, falling back to
/// the HTTP status.
async fn server_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return ApiError::Server(message.to_string());
        }
    }

    if body.trim().is_empty() {
        ApiError::Server(format!("HTTP {status}"))
    } else {
        ApiError::Server(format!("HTTP {status} ({body})"))
    }
}

async fn parse_json<T: for<'de> Deserialize<'de>>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Server(format!("unexpected response shape: {e}")))
}

// ============================================================================
// Manuscripts
// ============================================================================

/// The list endpoints sometimes return a single object instead of an array;
/// coerce either shape to a list.
pub fn coerce_manuscript_list(value: serde_json::Value) -> Result<Vec<Manuscript>, ApiError> {
    let result = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|m| vec![m])
    };
    result.map_err(|e| ApiError::Server(format!("unexpected response shape: {e}")))
}

async fn fetch_manuscript_list(url: &str) -> Result<Vec<Manuscript>, ApiError> {
    let response = Request::get(url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    let value: serde_json::Value = parse_json(response).await?;
    coerce_manuscript_list(value)
}

pub async fn fetch_manuscripts() -> Result<Vec<Manuscript>, ApiError> {
    fetch_manuscript_list(&format!("{}/manuscripts", api_base())).await
}

pub async fn fetch_manuscripts_sorted() -> Result<Vec<Manuscript>, ApiError> {
    fetch_manuscript_list(&format!("{}/manuscripts/sorted", api_base())).await
}

pub async fn fetch_manuscripts_by_state(state: &str) -> Result<Vec<Manuscript>, ApiError> {
    fetch_manuscript_list(&format!(
        "{}/manuscripts/state/{}",
        api_base(),
        encode(state)
    ))
    .await
}

pub async fn fetch_author_manuscripts(email: &str) -> Result<Vec<Manuscript>, ApiError> {
    fetch_manuscript_list(&format!("{}/manuscripts/{}", api_base(), encode(email))).await
}

pub async fn create_manuscript(manuscript: &NewManuscript) -> Result<(), ApiError> {
    let url = format!("{}/manuscripts/create", api_base());
    let response = Request::put(&url)
        .json(manuscript)
        .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

pub async fn submit_action(action: &ManuscriptAction) -> Result<(), ApiError> {
    let url = format!("{}/manuscripts/receive_action", api_base());
    let response = Request::put(&url)
        .json(action)
        .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

pub async fn delete_manuscript(manu_id: &str) -> Result<(), ApiError> {
    let url = format!("{}/manuscripts/delete/{}", api_base(), encode(manu_id));
    let response = Request::delete(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    Ok(())
}

// ============================================================================
// Workflow catalog
// ============================================================================

/// Raw `state_names` payload. The shape has varied between backend
/// revisions (map or array), so parsing is left to the catalog module.
pub async fn fetch_state_names_raw() -> Result<serde_json::Value, ApiError> {
    let url = format!("{}/manuscripts/state_names", api_base());
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    parse_json(response).await
}

pub async fn fetch_valid_states() -> Result<Vec<StateOption>, ApiError> {
    let url = format!("{}/manuscripts/valid_states", api_base());
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    parse_json(response).await
}

pub async fn fetch_state_transitions() -> Result<HashMap<String, Vec<String>>, ApiError> {
    let url = format!("{}/manuscripts/state_transitions", api_base());
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    parse_json(response).await
}

// ============================================================================
// People directory
// ============================================================================

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "Return")]
    identity: Identity,
}

pub async fn login(email: &str, password: &str) -> Result<Identity, ApiError> {
    let url = format!("{}/people/login", api_base());
    let body = serde_json::json!({ "email": email, "password": password });
    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    let data: LoginResponse = parse_json(response).await?;
    Ok(data.identity)
}

pub async fn fetch_referees() -> Result<Vec<String>, ApiError> {
    let url = format!("{}/people/referees", api_base());
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    parse_json(response).await
}

/// Look up a person's directory record by email. The name endpoint returns
/// a partial record (often just `name`). Best-effort: callers treat a
/// failure as "no name known" and show the raw email.
pub async fn fetch_person(email: &str) -> Result<Person, ApiError> {
    let url = format!("{}/people/name/{}", api_base(), encode(email));
    let response = Request::get(&url).send().await.map_err(network_error)?;
    if !response.ok() {
        return Err(server_error(response).await);
    }
    parse_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_single_object_to_list() {
        let single = serde_json::json!({
            "manu_id": "m1", "title": "T", "author": "a@b.edu", "curr_state": "SUB"
        });
        let list = coerce_manuscript_list(single).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].manu_id, "m1");
    }

    #[test]
    fn passes_arrays_through() {
        let arr = serde_json::json!([
            { "manu_id": "m1", "title": "T", "author": "a@b.edu", "curr_state": "SUB" },
            { "manu_id": "m2", "title": "U", "author": "c@d.edu", "curr_state": "REV" }
        ]);
        let list = coerce_manuscript_list(arr).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].curr_state, "REV");
    }

    #[test]
    fn malformed_list_is_a_server_error() {
        let bad = serde_json::json!({ "message": "not a manuscript" });
        assert!(matches!(
            coerce_manuscript_list(bad),
            Err(ApiError::Server(_))
        ));
    }

    #[test]
    fn error_display_prefixes_are_distinct() {
        let net = ApiError::Network("failed to reach server".to_string());
        let srv = ApiError::Server("invalid action".to_string());
        assert!(net.to_string().starts_with("Network error:"));
        assert!(srv.to_string().starts_with("API error:"));
    }
}
