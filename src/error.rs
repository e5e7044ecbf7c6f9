//! Error types for gh-merge-pr

use thiserror::Error;

/// Errors that can abort a merge invocation
///
/// A rejected merge (non-200 status) is not an error: it is reported as
/// [`MergeOutcome::Rejected`](crate::types::MergeOutcome::Rejected).
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, connection refused, timeout, invalid header)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or parsing failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by a transport other than reqwest
    #[error("transport failed: {0}")]
    Transport(String),

    /// Non-200 response whose body is not JSON
    #[error("merge failed with status {status}, error body is not JSON")]
    RejectedBody {
        /// HTTP status code
        status: u16,
        /// Parse failure of the body
        source: serde_json::Error,
    },

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// API base URL could not be parsed
    #[error("invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
