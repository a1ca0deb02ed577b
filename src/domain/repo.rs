//! Tracked repository configuration entry

use serde::Deserialize;
use std::fmt;

/// A git-hosted dependency tracked via configuration
///
/// `name` must equal a parsed dependency name (exact string match) for
/// the repository to be checked during reconciliation.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TrackedRepository {
    /// Dependency name this repository is checked against
    pub name: String,
    /// Git remote URL used for the tag listing
    pub repo_url: String,
    /// Optional access token, spliced into the fetch URL as inline
    /// credentials. Never logged or printed.
    #[serde(default)]
    pub token: Option<String>,
}

impl TrackedRepository {
    /// Creates a new tracked repository without a token
    pub fn new(name: impl Into<String>, repo_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repo_url: repo_url.into(),
            token: None,
        }
    }

    /// Sets the access token (builder pattern)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

// Manual Debug keeps the token out of logs and panic messages.
impl fmt::Debug for TrackedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedRepository")
            .field("name", &self.name)
            .field("repo_url", &self.repo_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
