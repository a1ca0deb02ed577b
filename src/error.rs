//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: manifest detection and parsing failures (fatal to the run)
//! - ConfigError: tracked-repository config failures (fatal to the run)
//! - ResolveError: upstream version resolution failures (per-dependency,
//!   the affected dependency is classified Unresolved and the run continues)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version resolution related errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors related to manifest detection and parsing
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error (package.json, SBOM, assets file)
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// XML parsing error (packages.config, *.csproj)
    #[error("failed to parse XML in {path}: {message}")]
    XmlParseError { path: PathBuf, message: String },

    /// Unsupported manifest format (unknown basename/extension)
    #[error("unsupported manifest format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// SBOM document whose bomFormat is not CycloneDX
    #[error("unsupported SBOM format '{bom_format}' in {path}: expected CycloneDX")]
    UnsupportedSbomFormat { path: PathBuf, bom_format: String },

    /// No dependency file could be located in the target directory
    #[error("no known dependency file found in {path}")]
    NoManifestFound { path: PathBuf },
}

/// Errors related to configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

/// Errors related to upstream version resolution
///
/// Every variant is recoverable at the run level: the dependency it
/// concerns is classified Unresolved and reconciliation continues.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Remote tag listing process failed
    #[error("git ls-remote failed for {url}: {message}")]
    CommandFailed { url: String, message: String },

    /// Tag listing contained no syntactically valid semver tag
    #[error("no valid semver tags found for {url}")]
    NoValidTags { url: String },

    /// Package not found in the registry (HTTP 404)
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Request exceeded the bounded timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// Response body could not be decoded
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Registry returned an empty version list
    #[error("no published versions found for '{package}'")]
    NoVersions { package: String },

    /// No declared or installed version is known for the dependency
    #[error("no declared version found for '{name}'")]
    NoDeclaredVersion { name: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new XmlParseError
    pub fn xml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::XmlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnsupportedFormat error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        ManifestError::UnsupportedFormat { path: path.into() }
    }

    /// Creates a new UnsupportedSbomFormat error
    pub fn unsupported_sbom_format(
        path: impl Into<PathBuf>,
        bom_format: impl Into<String>,
    ) -> Self {
        ManifestError::UnsupportedSbomFormat {
            path: path.into(),
            bom_format: bom_format.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new CommandFailed error
    pub fn command_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::CommandFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new NoValidTags error
    pub fn no_valid_tags(url: impl Into<String>) -> Self {
        ResolveError::NoValidTags { url: url.into() }
    }

    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        ResolveError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        ResolveError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ResolveError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new NoDeclaredVersion error
    pub fn no_declared_version(name: impl Into<String>) -> Self {
        ResolveError::NoDeclaredVersion { name: name.into() }
    }
}
