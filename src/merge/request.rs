//! Merge request construction - pure functions
//!
//! No I/O happens here: config and credential go in, a fully formed
//! request comes out.

use crate::auth::Credential;
use crate::config::MergeConfig;
use crate::error::Result;

/// Versioned JSON media type for the GitHub REST API v3.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// A merge request ready to be sent as an HTTP PUT
#[derive(Clone, PartialEq, Eq)]
pub struct MergeHttpRequest {
    /// Full endpoint URL
    pub url: String,
    /// `Authorization` header value (`token <credential>`)
    pub authorization: String,
    /// `Accept` header value
    pub accept: &'static str,
    /// Serialized JSON body
    pub body: String,
}

impl std::fmt::Debug for MergeHttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeHttpRequest")
            .field("url", &self.url)
            .field("authorization", &"token <redacted>")
            .field("accept", &self.accept)
            .field("body", &self.body)
            .finish()
    }
}

/// Build the merge request for `config`.
///
/// The credential is used as-is; a missing token still produces a request.
pub fn build_merge_request(
    config: &MergeConfig,
    credential: &Credential,
) -> Result<MergeHttpRequest> {
    Ok(MergeHttpRequest {
        url: config.endpoint_url(),
        authorization: credential.authorization_header(),
        accept: ACCEPT_MEDIA_TYPE,
        body: serde_json::to_string(&config.payload())?,
    })
}
