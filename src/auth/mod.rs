//! Authentication for GitHub
//!
//! The token comes from an environment variable and is sent as-is. Its
//! presence is not checked before the request goes out: an unset variable
//! yields an empty `token ` header and the API decides.

use std::env;

/// Environment variable read for the token when none is configured
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Token used for the `Authorization` header
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    token: Option<String>,
}

impl Credential {
    /// Wrap a token value (`None` when absent)
    pub const fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Read the token from the named environment variable
    ///
    /// Unset or non-UTF-8 values are treated as absent.
    pub fn from_env(var: &str) -> Self {
        Self::new(env::var(var).ok())
    }

    /// Whether a token value was found
    pub const fn is_present(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.token.as_deref().unwrap_or_default())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = if self.is_present() { "<redacted>" } else { "<missing>" };
        f.debug_struct("Credential").field("token", &shown).finish()
    }
}
