//! Core types for gh-merge-pr

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pull request on a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// PR number
    pub number: u64,
}

impl std::fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Create a merge commit
    #[default]
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

/// JSON body of the merge request
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePayload {
    /// Title of the merge commit
    pub commit_title: String,
    /// Extra detail appended to the merge commit message
    pub commit_message: String,
    /// Merge strategy
    pub merge_method: MergeMethod,
}

/// Outcome of a merge request that reached the API
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// The API answered 200
    Merged {
        /// PR number that was merged
        pr_number: u64,
        /// SHA of the merge commit, when the response carried one
        sha: Option<String>,
        /// Message from the API, when the response carried one
        message: Option<String>,
    },
    /// The API answered with any other status
    Rejected {
        /// PR number that was targeted
        pr_number: u64,
        /// HTTP status code
        status: u16,
        /// Error payload returned by the API
        body: Value,
    },
}

impl MergeOutcome {
    /// Whether the PR was merged
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }

    /// First line of the console report
    pub fn headline(&self) -> String {
        match self {
            Self::Merged { pr_number, .. } => format!("PR #{pr_number} merged successfully!"),
            Self::Rejected { status, .. } => format!("Merge failed: {status}"),
        }
    }
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline())?;
        if let Self::Rejected { body, .. } = self {
            write!(f, "\n{body}")?;
        }
        Ok(())
    }
}

/// Fields read from a successful merge response
///
/// GitHub answers `{"sha": ..., "merged": true, "message": ...}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MergeResponse {
    pub sha: Option<String>,
    pub message: Option<String>,
}
