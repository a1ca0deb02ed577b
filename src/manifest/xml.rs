//! XML package list parsers (packages.config and *.csproj)
//!
//! Two schema variants share the event-reader machinery:
//! - packages.config: a flat list of `<package id=".." />` elements
//! - csproj: `<ItemGroup>` groups (possibly repeated, all scanned)
//!   holding `<PackageReference Include=".." />` elements

use super::ManifestScan;
use crate::domain::DependencyRecord;
use crate::error::ManifestError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Parses a packages.config document into a scan
pub fn parse_packages_config(content: &str, path: &Path) -> Result<ManifestScan, ManifestError> {
    collect_attribute(content, path, b"package", "id")
}

/// Parses a csproj project file into a scan
pub fn parse_csproj(content: &str, path: &Path) -> Result<ManifestScan, ManifestError> {
    collect_attribute(content, path, b"PackageReference", "Include")
}

/// Walks the document and records the given attribute of every element
/// with the given name, wherever it nests
fn collect_attribute(
    content: &str,
    path: &Path,
    element: &[u8],
    attribute: &str,
) -> Result<ManifestScan, ManifestError> {
    let mut reader = Reader::from_reader(content.as_bytes());
    let mut buf = Vec::new();
    let mut scan = ManifestScan::new();
    let source = path.display().to_string();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() == element {
                    if let Some(name) = attribute_value(&e, attribute, path)? {
                        scan.push_record(
                            DependencyRecord::new(name, "nuget").with_source(source.clone()),
                        );
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ManifestError::xml_parse_error(path, e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(scan)
}

/// Reads one attribute off an element, unescaping its value
fn attribute_value(
    element: &BytesStart<'_>,
    attribute: &str,
    path: &Path,
) -> Result<Option<String>, ManifestError> {
    let attr = element
        .try_get_attribute(attribute)
        .map_err(|e| ManifestError::xml_parse_error(path, e.to_string()))?;

    match attr {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| ManifestError::xml_parse_error(path, e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}
