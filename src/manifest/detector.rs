//! Manifest file discovery
//!
//! Detection order: SBOM candidates first (an SBOM enumerates the build
//! more completely than any raw manifest), then well-known manifest
//! basenames, then a `*.csproj` glob. The first match wins; nothing is
//! content-sniffed.

use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// SBOM filenames probed before raw manifests
const SBOM_CANDIDATES: &[&str] = &["bom.json", "sbom.json"];

/// Well-known manifest basenames, in probe order
const MANIFEST_CANDIDATES: &[&str] = &[
    "go.mod",
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    "Gemfile",
    "Cargo.toml",
    "packages.config",
];

/// Locates the manifest to check in `dir`
pub fn detect_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    for name in SBOM_CANDIDATES {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    if let Some(found) = find_by_suffix(dir, ".cdx.json") {
        return Ok(found);
    }

    for name in MANIFEST_CANDIDATES {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    if let Some(found) = find_by_suffix(dir, ".csproj") {
        return Ok(found);
    }

    Err(ManifestError::NoManifestFound {
        path: dir.to_path_buf(),
    })
}

/// First directory entry (sorted by name, for determinism) whose
/// filename ends with `suffix`
fn find_by_suffix(dir: &Path, suffix: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix))
        })
        .collect();
    matches.sort();
    matches.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sbom_preferred_over_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "").unwrap();
        fs::write(dir.path().join("bom.json"), "{}").unwrap();

        let found = detect_manifest(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("bom.json"));
    }

    #[test]
    fn test_cdx_suffix_detected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("project.cdx.json"), "{}").unwrap();

        let found = detect_manifest(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("project.cdx.json"));
    }

    #[test]
    fn test_well_known_manifest_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("go.mod"), "").unwrap();

        // go.mod probes before package.json
        let found = detect_manifest(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("go.mod"));
    }

    #[test]
    fn test_csproj_glob_fallback() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("MyApp.csproj"), "<Project/>").unwrap();

        let found = detect_manifest(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("MyApp.csproj"));
    }

    #[test]
    fn test_empty_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let err = detect_manifest(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::NoManifestFound { .. }));
    }

    #[test]
    fn test_csproj_glob_is_deterministic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Zeta.csproj"), "<Project/>").unwrap();
        fs::write(dir.path().join("Alpha.csproj"), "<Project/>").unwrap();

        let found = detect_manifest(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("Alpha.csproj"));
    }
}
