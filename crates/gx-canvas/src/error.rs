//! Canvas client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Canvas REST API.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Canvas returned a non-success status code.
    #[error("Canvas API request failed ({status}) for {url}: {message}")]
    Api {
        /// HTTP status code returned by Canvas.
        status: u16,
        /// Locator of the failed request.
        url: String,
        /// Response body, if any.
        message: String,
    },

    /// Failed to parse a Canvas response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A request locator could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
