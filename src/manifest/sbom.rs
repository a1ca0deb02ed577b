//! CycloneDX SBOM parser
//!
//! Only documents whose `bomFormat` is exactly `"CycloneDX"` are
//! accepted; a well-formed SBOM of any other schema is rejected as
//! unsupported. Components are filtered to `type == "library"`; the
//! ecosystem tag and source path come from the syft-emitted property
//! list. Duplicate component names overwrite earlier entries (last
//! write wins) and are surfaced through the scan's duplicate list.

use super::ManifestScan;
use crate::domain::DependencyRecord;
use crate::error::ManifestError;
use serde::Deserialize;
use std::path::Path;

/// Property carrying the component's package ecosystem
const PROP_PACKAGE_TYPE: &str = "syft:package:type";

/// Property carrying the component's first declaration path
const PROP_LOCATION_PATH: &str = "syft:location:0:path";

/// CycloneDX document, restricted to the fields reconciliation needs
#[derive(Debug, Deserialize)]
struct SbomDocument {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(default)]
    components: Vec<SbomComponent>,
}

#[derive(Debug, Deserialize)]
struct SbomComponent {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    properties: Vec<SbomProperty>,
}

#[derive(Debug, Deserialize)]
struct SbomProperty {
    name: String,
    value: String,
}

impl SbomComponent {
    fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Parses a CycloneDX SBOM document into a scan
pub fn parse(content: &str, path: &Path) -> Result<ManifestScan, ManifestError> {
    let document: SbomDocument = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    if document.bom_format != "CycloneDX" {
        return Err(ManifestError::unsupported_sbom_format(
            path,
            document.bom_format,
        ));
    }

    let mut scan = ManifestScan::new();

    for component in document.components {
        if component.component_type != "library" {
            continue;
        }

        let kind = component.property(PROP_PACKAGE_TYPE).unwrap_or("library");
        let mut record = DependencyRecord::new(&component.name, kind);
        if let Some(version) = &component.version {
            record = record.with_version(version);
        }
        if let Some(location) = component.property(PROP_LOCATION_PATH) {
            record = record.with_source(location);
        }
        scan.push_record(record);
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOM_PATH: &str = "bom.json";

    fn sbom(components: &str) -> String {
        format!(
            r#"{{
                "bomFormat": "CycloneDX",
                "specVersion": "1.5",
                "components": [{}]
            }}"#,
            components
        )
    }

    #[test]
    fn test_library_components_extracted() {
        let content = sbom(
            r#"{
                "type": "library",
                "name": "github.com/stretchr/testify",
                "version": "v1.9.0",
                "properties": [
                    {"name": "syft:package:type", "value": "go-module"},
                    {"name": "syft:location:0:path", "value": "/go.mod"}
                ]
            }"#,
        );
        let scan = parse(&content, Path::new(BOM_PATH)).unwrap();
        let record = &scan.records["github.com/stretchr/testify"];
        assert_eq!(record.declared_version.as_deref(), Some("v1.9.0"));
        assert_eq!(record.kind, "go-module");
        assert_eq!(record.source_location.as_deref(), Some("/go.mod"));
    }

    #[test]
    fn test_non_library_components_skipped() {
        let content = sbom(
            r#"{
                "type": "file",
                "name": "main.go",
                "properties": [{"name": "syft:package:type", "value": "go-module"}]
            },
            {
                "type": "library",
                "name": "github.com/example/lib",
                "version": "v1.0.0",
                "properties": [{"name": "syft:package:type", "value": "go-module"}]
            }"#,
        );
        let scan = parse(&content, Path::new(BOM_PATH)).unwrap();
        assert_eq!(scan.names, vec!["github.com/example/lib"]);
    }

    #[test]
    fn test_missing_properties_default_to_library() {
        let content = sbom(r#"{"type": "library", "name": "somelib", "version": "1.0.0"}"#);
        let scan = parse(&content, Path::new(BOM_PATH)).unwrap();
        assert_eq!(scan.records["somelib"].kind, "library");
        assert!(scan.records["somelib"].source_location.is_none());
    }

    #[test]
    fn test_non_cyclonedx_format_rejected() {
        let content = r#"{"bomFormat": "SPDX", "components": []}"#;
        let err = parse(content, Path::new(BOM_PATH)).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::UnsupportedSbomFormat { ref bom_format, .. } if bom_format == "SPDX"
        ));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = parse("{", Path::new(BOM_PATH)).unwrap_err();
        assert!(matches!(err, ManifestError::JsonParseError { .. }));
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let content = sbom(
            r#"{"type": "library", "name": "dup", "version": "1.0.0"},
               {"type": "library", "name": "dup", "version": "2.0.0"}"#,
        );
        let scan = parse(&content, Path::new(BOM_PATH)).unwrap();
        assert_eq!(scan.declared_version("dup"), Some("2.0.0"));
        assert_eq!(scan.duplicates, vec!["dup"]);
    }

    #[test]
    fn test_component_order_preserved() {
        let content = sbom(
            r#"{"type": "library", "name": "zeta", "version": "1.0.0"},
               {"type": "library", "name": "alpha", "version": "1.0.0"}"#,
        );
        let scan = parse(&content, Path::new(BOM_PATH)).unwrap();
        assert_eq!(scan.names, vec!["zeta", "alpha"]);
    }
}
