//! Dependency record structure

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dependency as declared by a manifest or SBOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Package coordinate as declared by its ecosystem: a URL-like module
    /// path, a registry package id, or a plain library name. Exact string
    /// equality on this field joins the record to tracked-repository config.
    pub name: String,
    /// Version string as found in the manifest/SBOM, if the format carries
    /// one. May have a `v` prefix, pre-release suffix, or build metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_version: Option<String>,
    /// Ecosystem tag ("go-module", "npm", "nuget", "library", ...).
    /// Provenance only, never branched on.
    pub kind: String,
    /// File/path the record was declared in. Provenance only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
}

impl DependencyRecord {
    /// Creates a new dependency record with no declared version
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: None,
            kind: kind.into(),
            source_location: None,
        }
    }

    /// Sets the declared version (builder pattern)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.declared_version = Some(version.into());
        self
    }

    /// Sets the source location (builder pattern)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_location = Some(source.into());
        self
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declared_version {
            Some(version) => write!(f, "{}@{} [{}]", self.name, version, self.kind),
            None => write!(f, "{} [{}]", self.name, self.kind),
        }
    }
}
