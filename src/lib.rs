//! depfresh - Dependency staleness checker library
//!
//! Core functionality for checking project dependencies against their
//! upstream latest versions:
//! - manifest detection and parsing (go.mod, package.json,
//!   requirements.txt, pyproject.toml, Gemfile, Cargo.toml,
//!   packages.config, *.csproj, CycloneDX SBOM)
//! - latest-version resolution via git tag listings and the NuGet
//!   flat-container registry
//! - version normalization and freshness classification

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod version;
