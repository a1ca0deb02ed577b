//! Reconciliation engine
//!
//! Two passes over one manifest scan:
//!
//! 1. Tracked repositories, in configuration order. Each repo whose
//!    name appears in the scan resolves its latest version from the
//!    git tag listing; repos absent from the scan are skipped without
//!    an entry.
//! 2. Remaining scan entries, in manifest order. Names not covered by
//!    a tracked repository fall back to the package registry, but only
//!    when a declared or installed version is known to compare against.
//!
//! Resolution failures never abort the run; the affected dependency is
//! classified Unresolved and the pass continues.

use crate::domain::{Classification, ReconciliationReport, TrackedRepository};
use crate::manifest::ManifestScan;
use crate::progress::Progress;
use crate::resolver::{GitRemote, GitTagResolver, RegistryResolver};
use crate::version::{versions_match, Normalization};
use std::collections::{HashMap, HashSet};

/// Drives both reconciliation passes and assembles the report
pub struct Reconciler<'a, G: GitRemote, R: RegistryResolver> {
    repos: &'a [TrackedRepository],
    git: GitTagResolver<G>,
    registry: R,
    normalization: Normalization,
}

impl<'a, G: GitRemote, R: RegistryResolver> Reconciler<'a, G, R> {
    pub fn new(
        repos: &'a [TrackedRepository],
        git: GitTagResolver<G>,
        registry: R,
        normalization: Normalization,
    ) -> Self {
        Self {
            repos,
            git,
            registry,
            normalization,
        }
    }

    /// Runs both passes and returns the report by value
    pub async fn run(
        &self,
        scan: &ManifestScan,
        installed: &HashMap<String, String>,
        progress: &mut Progress,
    ) -> ReconciliationReport {
        let tracked: HashSet<&str> = self.repos.iter().map(|r| r.name.as_str()).collect();

        let registry_candidates: Vec<&str> = scan
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| !tracked.contains(name))
            .filter(|name| {
                scan.declared_version(name).is_some() || installed.contains_key(*name)
            })
            .collect();

        let primary_total = self
            .repos
            .iter()
            .filter(|r| scan.contains(&r.name))
            .count();
        progress.start(
            (primary_total + registry_candidates.len()) as u64,
            "Checking dependencies",
        );

        let mut report = ReconciliationReport::new();

        for repo in self.repos {
            if !scan.contains(&repo.name) {
                continue;
            }
            progress.set_message(&format!("Checking {}", repo.name));
            report.push(self.classify_tracked(repo, scan, installed));
            progress.inc();
        }

        for name in registry_candidates {
            progress.set_message(&format!("Checking {}", name));
            report.push(self.classify_registry(name, scan, installed).await);
            progress.inc();
        }

        progress.finish_and_clear();
        report
    }

    fn classify_tracked(
        &self,
        repo: &TrackedRepository,
        scan: &ManifestScan,
        installed: &HashMap<String, String>,
    ) -> Classification {
        let latest = match self.git.latest_tag(&repo.repo_url, repo.token.as_deref()) {
            Ok(tag) => tag,
            Err(e) => return Classification::unresolved(&repo.name, e.to_string()),
        };

        let Some(current) = declared_or_installed(&repo.name, scan, installed) else {
            return Classification::unresolved(
                &repo.name,
                crate::error::ResolveError::no_declared_version(&repo.name).to_string(),
            );
        };

        self.compare(&repo.name, current, &latest)
    }

    async fn classify_registry(
        &self,
        name: &str,
        scan: &ManifestScan,
        installed: &HashMap<String, String>,
    ) -> Classification {
        // Candidates were pre-filtered, so a version is always known here.
        let Some(current) = declared_or_installed(name, scan, installed) else {
            return Classification::unresolved(
                name,
                crate::error::ResolveError::no_declared_version(name).to_string(),
            );
        };

        match self.registry.latest_version(name).await {
            Ok(latest) => self.compare(name, current, &latest),
            Err(e) => Classification::unresolved(name, e.to_string()),
        }
    }

    fn compare(&self, name: &str, current: &str, latest: &str) -> Classification {
        if versions_match(current, latest, self.normalization) {
            Classification::up_to_date(name, current)
        } else {
            Classification::outdated(name, current, latest)
        }
    }
}

/// Declared manifest version, falling back to the installed version
fn declared_or_installed<'v>(
    name: &str,
    scan: &'v ManifestScan,
    installed: &'v HashMap<String, String>,
) -> Option<&'v str> {
    scan.declared_version(name)
        .or_else(|| installed.get(name).map(String::as_str))
}
