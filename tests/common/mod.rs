//! Shared test helpers

#![allow(dead_code)]

mod mock_transport;

pub use mock_transport::MockTransport;

use gh_merge_pr::auth::Credential;
use gh_merge_pr::config::MergeConfig;
use gh_merge_pr::types::PullRequestRef;

/// Endpoint for the default config
pub const DEFAULT_ENDPOINT: &str =
    "https://api.github.com/repos/yoprobotics/calculateurs-roi-automation/pulls/16/merge";

/// Path of the default PR's merge endpoint, relative to the API base
pub const DEFAULT_MERGE_PATH: &str =
    "/repos/yoprobotics/calculateurs-roi-automation/pulls/16/merge";

/// Default config pointed at `api_base`
pub fn config_with_base(api_base: &str) -> MergeConfig {
    MergeConfig {
        api_base: api_base.to_string(),
        ..MergeConfig::default()
    }
}

/// Config for an arbitrary PR
pub fn config_for(owner: &str, repo: &str, number: u64) -> MergeConfig {
    MergeConfig {
        target: PullRequestRef {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        },
        ..MergeConfig::default()
    }
}

/// Credential holding `token`
pub fn token(token: &str) -> Credential {
    Credential::new(Some(token.to_string()))
}
