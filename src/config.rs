//! Merge configuration
//!
//! Layers, later wins:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `<config_dir>/gh-merge-pr/config.toml` if present)
//! 3. Command-line overrides

use crate::auth::DEFAULT_TOKEN_ENV;
use crate::error::{Error, Result};
use crate::types::{MergeMethod, MergePayload, PullRequestRef};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const DEFAULT_OWNER: &str = "yoprobotics";
const DEFAULT_REPO: &str = "calculateurs-roi-automation";
const DEFAULT_PR_NUMBER: u64 = 16;
const DEFAULT_COMMIT_TITLE: &str =
    "Fusion: Suppression des modes détaillé et analyse du calculateur ROI";
const DEFAULT_COMMIT_MESSAGE: &str = "Cette fusion supprime les modes détaillé et analyse du \
     calculateur ROI pour simplifier l'interface utilisateur. Ces modes seront réintégrés dans \
     une version ultérieure de l'application.";

/// Directory name for gh-merge-pr within the user config dir.
const CONFIG_DIR: &str = "gh-merge-pr";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// Everything the merge invoker needs besides the credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Pull request to merge
    pub target: PullRequestRef,
    /// Title of the merge commit
    pub commit_title: String,
    /// Message of the merge commit
    pub commit_message: String,
    /// Merge strategy (not exposed to files or flags)
    pub merge_method: MergeMethod,
    /// API base URL, without trailing slash
    pub api_base: String,
    /// Environment variable holding the token
    pub token_env: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            target: PullRequestRef {
                owner: DEFAULT_OWNER.to_string(),
                repo: DEFAULT_REPO.to_string(),
                number: DEFAULT_PR_NUMBER,
            },
            commit_title: DEFAULT_COMMIT_TITLE.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            merge_method: MergeMethod::Merge,
            api_base: DEFAULT_API_BASE.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl MergeConfig {
    /// URL of the merge endpoint for the configured PR
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/merge",
            self.api_base.trim_end_matches('/'),
            self.target.owner,
            self.target.repo,
            self.target.number
        )
    }

    /// Request body for the configured merge
    pub fn payload(&self) -> MergePayload {
        MergePayload {
            commit_title: self.commit_title.clone(),
            commit_message: self.commit_message.clone(),
            merge_method: self.merge_method,
        }
    }

    /// Apply a layer of overrides on top of this config
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides {
            owner,
            repo,
            pr_number,
            commit_title,
            commit_message,
            api_base,
            token_env,
        } = overrides;

        if let Some(owner) = owner {
            self.target.owner = owner;
        }
        if let Some(repo) = repo {
            self.target.repo = repo;
        }
        if let Some(number) = pr_number {
            self.target.number = number;
        }
        if let Some(title) = commit_title {
            self.commit_title = title;
        }
        if let Some(message) = commit_message {
            self.commit_message = message;
        }
        if let Some(base) = api_base {
            self.api_base = base;
        }
        if let Some(var) = token_env {
            self.token_env = var;
        }
    }

    /// Check that the config can produce a well-formed request
    pub fn validate(&self) -> Result<()> {
        check_path_segment("owner", &self.target.owner)?;
        check_path_segment("repo", &self.target.repo)?;
        if self.token_env.trim().is_empty() {
            return Err(Error::Config("token_env must not be empty".to_string()));
        }

        let base = Url::parse(&self.api_base)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_base must be an http(s) URL, got scheme '{}'",
                base.scheme()
            )));
        }

        Ok(())
    }
}

/// `owner` and `repo` go into the URL path verbatim, so each must stay one segment.
fn check_path_segment(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Config(format!("{field} must not be empty")));
    }
    if matches!(value, "." | "..") || value.contains(['/', '?', '#', '\\']) {
        return Err(Error::Config(format!(
            "{field} '{value}' is not a single path segment"
        )));
    }
    Ok(())
}

/// One layer of optional settings (config file or command line)
///
/// `merge_method` is intentionally absent: unknown keys are rejected, so a
/// config file cannot change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repo: Option<String>,
    /// PR number
    pub pr_number: Option<u64>,
    /// Merge commit title
    pub commit_title: Option<String>,
    /// Merge commit message
    pub commit_message: Option<String>,
    /// API base URL
    pub api_base: Option<String>,
    /// Token environment variable name
    pub token_env: Option<String>,
}

/// Path of the per-user config file, if a config dir exists on this platform.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load overrides from a TOML file.
pub fn load_overrides(path: &Path) -> Result<ConfigOverrides> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Resolve the final config from defaults, a config file and CLI overrides.
///
/// An explicit `config_path` must exist. Without one, the per-user config
/// file is read only when present.
pub fn resolve_config(
    config_path: Option<&Path>,
    cli: ConfigOverrides,
) -> Result<MergeConfig> {
    let mut config = MergeConfig::default();

    let file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|path| path.is_file()),
    };

    if let Some(path) = file {
        debug!(path = %path.display(), "loading config file");
        config.apply(load_overrides(&path)?);
    }

    config.apply(cli);
    config.validate()?;

    debug!(pr = %config.target, api_base = %config.api_base, "resolved config");
    Ok(config)
}
