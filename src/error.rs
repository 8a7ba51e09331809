//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Map a non-2xx status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => HttpError::NotFound(body),
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
