//! Merge execution - effectful operations
//!
//! Sends a `MergeHttpRequest` through a `MergeTransport` and turns the
//! response into a `MergeOutcome`. Exactly one request is sent; nothing is
//! retried.

use crate::auth::Credential;
use crate::config::MergeConfig;
use crate::error::{Error, Result};
use crate::merge::request::{MergeHttpRequest, build_merge_request};
use crate::platform::{MergeTransport, TransportResponse};
use crate::types::{MergeOutcome, MergeResponse};
use serde_json::Value;
use tracing::debug;

/// Classify a raw response for `pr_number`.
///
/// Only status 200 counts as merged. Any other status must carry a JSON
/// error body; a body that does not parse is `Error::RejectedBody`, which
/// keeps the status.
pub fn interpret_response(
    pr_number: u64,
    response: &TransportResponse,
) -> Result<MergeOutcome> {
    if response.status == 200 {
        // Success body is informational only
        let details: MergeResponse = serde_json::from_str(&response.body).unwrap_or_default();
        return Ok(MergeOutcome::Merged {
            pr_number,
            sha: details.sha,
            message: details.message,
        });
    }

    let body: Value =
        serde_json::from_str(&response.body).map_err(|source| Error::RejectedBody {
            status: response.status,
            source,
        })?;
    Ok(MergeOutcome::Rejected {
        pr_number,
        status: response.status,
        body,
    })
}

/// Send a prepared merge request (EFFECTFUL)
///
/// Transport failures propagate unchanged.
pub async fn execute_merge(
    request: &MergeHttpRequest,
    pr_number: u64,
    transport: &dyn MergeTransport,
) -> Result<MergeOutcome> {
    let response = transport.put(request).await?;
    let outcome = interpret_response(pr_number, &response)?;

    match &outcome {
        MergeOutcome::Merged { sha, .. } => {
            debug!(pr_number, sha = ?sha, "merge complete");
        }
        MergeOutcome::Rejected { status, .. } => {
            debug!(pr_number, status, "merge rejected");
        }
    }

    Ok(outcome)
}

/// Merges one configured pull request
///
/// Holds the config and credential given at construction time and the
/// transport used to reach the API.
pub struct MergeInvoker<T> {
    config: MergeConfig,
    credential: Credential,
    transport: T,
}

impl<T: MergeTransport> MergeInvoker<T> {
    /// Create an invoker
    pub const fn new(config: MergeConfig, credential: Credential, transport: T) -> Self {
        Self {
            config,
            credential,
            transport,
        }
    }

    /// Config this invoker merges with
    pub const fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Transport this invoker sends through
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The request `invoke` would send
    pub fn request(&self) -> Result<MergeHttpRequest> {
        build_merge_request(&self.config, &self.credential)
    }

    /// Send the merge request once and classify the response
    pub async fn invoke(&self) -> Result<MergeOutcome> {
        let pr_number = self.config.target.number;
        debug!(pr = %self.config.target, method = %self.config.merge_method, "merging PR");

        let request = self.request()?;
        execute_merge(&request, pr_number, &self.transport).await
    }
}
