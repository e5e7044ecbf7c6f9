//! GitHub transport using reqwest

use crate::error::Result;
use crate::merge::MergeHttpRequest;
use crate::platform::{MergeTransport, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::debug;

/// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!("gh-merge-pr/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubTransport {
    http_client: Client,
}

impl GitHubTransport {
    /// Create a transport with reqwest defaults (no timeout override)
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl MergeTransport for GitHubTransport {
    async fn put(&self, request: &MergeHttpRequest) -> Result<TransportResponse> {
        debug!(url = %request.url, "sending PUT");

        let response = self
            .http_client
            .put(&request.url)
            .header(AUTHORIZATION, &request.authorization)
            .header(ACCEPT, request.accept)
            .body(request.body.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "received response");
        Ok(TransportResponse { status, body })
    }
}
