//! Installed-version fallback from the NuGet assets file
//!
//! Manifest formats that only list names (constraint maps, XML package
//! lists) do not say what is actually installed. When the project has
//! an `obj/project.assets.json`, its `libraries` map — keyed
//! `Name/Version` — supplies the installed versions. Loading is
//! best-effort: a missing or unreadable assets file yields an empty
//! mapping, never an error.

use std::collections::HashMap;
use std::path::Path;

/// Assets file location relative to the project directory
pub const ASSETS_FILE: &str = "obj/project.assets.json";

/// Loads installed versions from the project's assets file, if present
pub fn load_asset_versions(project_dir: &Path) -> HashMap<String, String> {
    let path = project_dir.join(ASSETS_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_asset_versions(&content),
        Err(_) => HashMap::new(),
    }
}

/// Parses the `libraries` map of an assets document
pub fn parse_asset_versions(content: &str) -> HashMap<String, String> {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(content) else {
        return HashMap::new();
    };

    let mut versions = HashMap::new();
    if let Some(libraries) = parsed.get("libraries").and_then(|l| l.as_object()) {
        for key in libraries.keys() {
            if let Some((name, version)) = key.split_once('/') {
                versions.insert(name.to_string(), version.to_string());
            }
        }
    }
    versions
}
