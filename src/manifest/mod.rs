//! Manifest detection and parsing
//!
//! Four manifest families are supported, dispatched purely by filename
//! (exact basename for well-known files, suffix match for `*.csproj`
//! and `*.cdx.json` — no content sniffing):
//! - line-oriented manifests (go.mod, requirements.txt, pyproject.toml,
//!   Gemfile, Cargo.toml)
//! - JSON dependency maps (package.json)
//! - XML package lists (packages.config, *.csproj)
//! - CycloneDX SBOM documents (bom.json, sbom.json, *.cdx.json)
//!
//! An unsupported filename is fatal to the run, as is any parse failure.

mod assets;
mod detector;
mod json_map;
mod lines;
mod sbom;
mod xml;

pub use assets::{load_asset_versions, parse_asset_versions, ASSETS_FILE};
pub use detector::detect_manifest;

use crate::domain::DependencyRecord;
use crate::error::ManifestError;
use indexmap::IndexMap;
use std::path::Path;

/// Closed set of supported manifest formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// One dependency token per significant line
    Lines,
    /// Top-level JSON `dependencies` object, keys only
    JsonMap,
    /// Flat `<package id=".."/>` list
    XmlPackages,
    /// `<ItemGroup><PackageReference Include=".."/></ItemGroup>` groups
    XmlCsproj,
    /// CycloneDX SBOM document
    Sbom,
}

impl ManifestKind {
    /// Selects the format for a manifest path, by filename only
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let Some(basename) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(ManifestError::unsupported_format(path));
        };

        match basename {
            "go.mod" | "requirements.txt" | "pyproject.toml" | "Gemfile" | "Cargo.toml" => {
                Ok(ManifestKind::Lines)
            }
            "package.json" => Ok(ManifestKind::JsonMap),
            "packages.config" => Ok(ManifestKind::XmlPackages),
            "bom.json" | "sbom.json" => Ok(ManifestKind::Sbom),
            _ if basename.ends_with(".csproj") => Ok(ManifestKind::XmlCsproj),
            _ if basename.ends_with(".cdx.json") => Ok(ManifestKind::Sbom),
            _ => Err(ManifestError::unsupported_format(path)),
        }
    }
}

/// Ecosystem provenance tag for a manifest path
fn ecosystem_tag(path: &Path) -> &'static str {
    match path.file_name().and_then(|n| n.to_str()) {
        Some("go.mod") => "go-module",
        Some("package.json") => "npm",
        Some("requirements.txt") | Some("pyproject.toml") => "python",
        Some("Gemfile") => "ruby",
        Some("Cargo.toml") => "rust",
        Some("packages.config") => "nuget",
        Some(name) if name.ends_with(".csproj") => "nuget",
        _ => "library",
    }
}

/// Flat result of parsing one manifest
///
/// `names` is the ordered dependency-name sequence; `records` maps each
/// name to its record with last-wins semantics on duplicates (the
/// CycloneDX collision policy). Overwritten names are remembered so the
/// driver can surface them.
#[derive(Debug, Clone, Default)]
pub struct ManifestScan {
    /// Dependency names in first-seen order
    pub names: Vec<String>,
    /// Name → record mapping, insertion ordered, last write wins
    pub records: IndexMap<String, DependencyRecord>,
    /// Names that occurred more than once
    pub duplicates: Vec<String>,
}

impl ManifestScan {
    /// Creates an empty scan
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dependency, overwriting any earlier record of the
    /// same name (last write wins)
    pub fn push_record(&mut self, record: DependencyRecord) {
        let name = record.name.clone();
        if self.records.insert(name.clone(), record).is_some() {
            self.duplicates.push(name);
        } else {
            self.names.push(name);
        }
    }

    /// Returns true if the scan contains a dependency of this name
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Declared version of a dependency, when the manifest carried one
    pub fn declared_version(&self, name: &str) -> Option<&str> {
        self.records
            .get(name)
            .and_then(|r| r.declared_version.as_deref())
    }
}

/// Parses the manifest at `path`, dispatching on its detected format
pub fn parse_manifest(path: &Path) -> Result<ManifestScan, ManifestError> {
    let kind = ManifestKind::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })?;

    match kind {
        ManifestKind::Lines => Ok(lines::parse(&content, ecosystem_tag(path), path)),
        ManifestKind::JsonMap => json_map::parse(&content, path),
        ManifestKind::XmlPackages => xml::parse_packages_config(&content, path),
        ManifestKind::XmlCsproj => xml::parse_csproj(&content, path),
        ManifestKind::Sbom => sbom::parse(&content, path),
    }
}
