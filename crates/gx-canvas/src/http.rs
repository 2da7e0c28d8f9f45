//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check so the page fetcher only deals with
//! bodies and headers. Canvas requests are never retried: any non-success
//! status becomes [`CanvasError::Api`] and aborts the current fetch.

use crate::error::CanvasError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`CanvasError::Api`] carrying the status code, the request locator, and
/// the response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CanvasError> {
    if !resp.status().is_success() {
        return Err(CanvasError::Api {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Value of the `Link` header, if present and valid UTF-8.
pub fn link_header(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::LINK)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
