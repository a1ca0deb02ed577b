//! JSON dependency map parser (package.json)
//!
//! Only the keys of the top-level `dependencies` object are extracted.
//! The values are constraint ranges, not installed versions — resolving
//! the installed version needs a lockfile or assets file, so they are
//! intentionally ignored here.

use super::ManifestScan;
use crate::domain::DependencyRecord;
use crate::error::ManifestError;
use std::path::Path;

/// Parses a JSON dependency map into a scan
pub fn parse(content: &str, path: &Path) -> Result<ManifestScan, ManifestError> {
    let parsed: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let mut scan = ManifestScan::new();
    let source = path.display().to_string();

    if let Some(deps) = parsed.get("dependencies").and_then(|d| d.as_object()) {
        // preserve_order keeps the document's key order
        for name in deps.keys() {
            scan.push_record(DependencyRecord::new(name, "npm").with_source(source.clone()));
        }
    }

    Ok(scan)
}
