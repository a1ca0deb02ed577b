//! Latest-tag resolution over `git ls-remote --tags`
//!
//! The subprocess boundary sits behind [`GitRemote`] so the selection
//! logic is testable against canned listings. Tag selection is semver
//! order, not listing order: every `refs/tags/` entry is parsed
//! (peeled `^{}` suffix and a single leading `v` stripped) and the
//! maximum valid version wins. Tokens spliced into the remote URL are
//! redacted from any error that could echo them.

use crate::error::ResolveError;
use regex::Regex;
use std::process::Command;

/// Boundary to the git remote-listing subprocess
pub trait GitRemote {
    /// Raw stdout of `git ls-remote --tags <url>`, or the failure text
    fn ls_remote_tags(&self, url: &str) -> Result<String, String>;
}

/// [`GitRemote`] backed by the system `git` binary
#[derive(Debug, Default)]
pub struct SystemGit;

impl SystemGit {
    pub fn new() -> Self {
        Self
    }
}

impl GitRemote for SystemGit {
    fn ls_remote_tags(&self, url: &str) -> Result<String, String> {
        let output = Command::new("git")
            .args(["ls-remote", "--tags", url])
            .output()
            .map_err(|e| e.to_string())?;

        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).into_owned());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolves the latest semver tag of a remote repository
#[derive(Debug)]
pub struct GitTagResolver<G: GitRemote> {
    remote: G,
}

impl<G: GitRemote> GitTagResolver<G> {
    pub fn new(remote: G) -> Self {
        Self { remote }
    }

    /// Highest semver tag of `repo_url`, returned as the original tag
    /// string (leading `v` intact)
    pub fn latest_tag(
        &self,
        repo_url: &str,
        token: Option<&str>,
    ) -> Result<String, ResolveError> {
        let url = authenticated_url(repo_url, token);

        let listing = self.remote.ls_remote_tags(&url).map_err(|message| {
            ResolveError::command_failed(repo_url, redact_token(&message, token))
        })?;

        latest_semver_tag(&listing).ok_or_else(|| ResolveError::no_valid_tags(repo_url))
    }
}

/// Splices a bearer token into the URL authority, if one is configured
fn authenticated_url(repo_url: &str, token: Option<&str>) -> String {
    let Some(token) = token else {
        return repo_url.to_string();
    };

    if let Some(rest) = repo_url.strip_prefix("https://") {
        format!("https://{}@{}", token, rest)
    } else if let Some(rest) = repo_url.strip_prefix("http://") {
        format!("http://{}@{}", token, rest)
    } else {
        repo_url.to_string()
    }
}

/// Replaces any echoed token with a placeholder
fn redact_token(message: &str, token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => message.replace(token, "***"),
        _ => message.to_string(),
    }
}

/// Scans a ls-remote listing and picks the maximum semver tag
fn latest_semver_tag(listing: &str) -> Option<String> {
    // Format: "<sha>\trefs/tags/<tag>", peeled entries end in ^{}
    let ref_line = match Regex::new(r"^(?P<sha>[0-9a-f]+)\s+refs/tags/(?P<tag>.+)$") {
        Ok(re) => re,
        Err(_) => return None,
    };

    let mut best: Option<(semver::Version, String)> = None;

    for line in listing.lines() {
        let Some(captures) = ref_line.captures(line.trim()) else {
            continue;
        };
        let raw_tag = &captures["tag"];
        let tag = raw_tag.strip_suffix("^{}").unwrap_or(raw_tag);

        let candidate = tag.strip_prefix('v').unwrap_or(tag);
        let Ok(version) = semver::Version::parse(candidate) else {
            continue;
        };

        match &best {
            Some((current, _)) if *current >= version => {}
            _ => best = Some((version, tag.to_string())),
        }
    }

    best.map(|(_, tag)| tag)
}
