//! Upstream version resolution
//!
//! Two resolution paths exist. Tracked repositories resolve through
//! `git ls-remote --tags` against their configured URL; everything else
//! falls back to a package registry behind the [`RegistryResolver`]
//! trait. Both paths report [`crate::error::ResolveError`] values that
//! the reconciliation engine downgrades to Unresolved classifications.

mod client;
mod git_tags;
mod nuget;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use git_tags::{GitRemote, GitTagResolver, SystemGit};
pub use nuget::{NuGetResolver, NUGET_FLAT_CONTAINER_URL};

use crate::error::ResolveError;
use async_trait::async_trait;

/// Package registry capable of answering "what is the latest version?"
#[async_trait]
pub trait RegistryResolver: Send + Sync {
    /// Human-readable registry name, used in error messages
    fn registry_name(&self) -> &'static str;

    /// Latest published version of `package`
    async fn latest_version(&self, package: &str) -> Result<String, ResolveError>;
}
