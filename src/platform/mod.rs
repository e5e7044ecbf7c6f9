//! Transport for the merge request
//!
//! The merge logic talks to GitHub only through [`MergeTransport`], so tests
//! can substitute a recording mock for the real HTTP client.

mod github;

pub use github::GitHubTransport;

use crate::error::Result;
use crate::merge::MergeHttpRequest;
use async_trait::async_trait;

/// Raw HTTP response: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

/// Sends a prepared merge request
#[async_trait]
pub trait MergeTransport: Send + Sync {
    /// Send the request as an HTTP PUT and return the raw response
    ///
    /// Network-level failures are returned as errors; any HTTP status,
    /// including 4xx/5xx, is a successful send.
    async fn put(&self, request: &MergeHttpRequest) -> Result<TransportResponse>;
}
