use thiserror::Error;

/// Errors produced by the fetch-parse-cache pipeline.
///
/// Mapped to HTTP status codes only at the server boundary
/// (`server::error`), never inside the pipeline itself.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL does not start with `http://` or `https://`.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The upstream server answered with a non-200 status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    /// Network failure, timeout, or body read error.
    #[error("Error fetching metadata: {0}")]
    Fetch(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Fetch(err.to_string())
    }
}
