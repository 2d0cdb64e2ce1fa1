//! Fetching of tab content fragments.

use contracts::errors::LoadError;
use gloo_net::http::Request;

/// GET an HTML fragment and return its body.
///
/// Any non-success status is an error; the body of such a response is ignored.
pub async fn fetch_fragment(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(LoadError::HttpStatus(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))
}
