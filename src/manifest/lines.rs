//! Line-oriented manifest parser
//!
//! One dependency per significant line: the first whitespace-delimited
//! token is the name. `#`-prefixed lines and blank lines are ignored,
//! and leading/trailing whitespace and mixed spacing are tolerated.
//! When the second token looks like a version (`v`-prefixed or
//! digit-leading), it is captured as the declared version.

use super::ManifestScan;
use crate::domain::DependencyRecord;
use std::path::Path;

/// Parses a line-oriented manifest into a scan
pub fn parse(content: &str, kind: &str, path: &Path) -> ManifestScan {
    let mut scan = ManifestScan::new();
    let source = path.display().to_string();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        let mut record = DependencyRecord::new(name, kind).with_source(source.clone());
        if let Some(version) = tokens.next().filter(|t| looks_like_version(t)) {
            record = record.with_version(version);
        }
        scan.push_record(record);
    }

    scan
}

/// A token is a version when it leads with a digit, optionally behind a
/// single `v`
fn looks_like_version(token: &str) -> bool {
    let bare = token.strip_prefix('v').unwrap_or(token);
    bare.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(content: &str) -> ManifestScan {
        parse(content, "go-module", Path::new("go.mod"))
    }

    #[test]
    fn test_first_token_per_line() {
        let scan = parse_str("github.com/example/lib v1.2.3\nanother/repo v2.0.0\n");
        assert_eq!(scan.names, vec!["github.com/example/lib", "another/repo"]);
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let scan = parse_str("\n# This is a comment\ngithub.com/example/lib v1.2.3\n\n");
        assert_eq!(scan.names, vec!["github.com/example/lib"]);
    }

    #[test]
    fn test_mixed_spacing_tolerated() {
        let scan = parse_str("  github.com/example/lib   v1.2.3  \n\tanother/repo\tv2.0.0\n");
        assert_eq!(scan.names, vec!["github.com/example/lib", "another/repo"]);
        assert_eq!(
            scan.declared_version("github.com/example/lib"),
            Some("v1.2.3")
        );
    }

    #[test]
    fn test_version_token_captured() {
        let scan = parse_str("github.com/stretchr/testify v1.9.0\n");
        assert_eq!(
            scan.declared_version("github.com/stretchr/testify"),
            Some("v1.9.0")
        );
    }

    #[test]
    fn test_non_version_second_token_ignored() {
        let scan = parse_str("module example.com/project\ngo 1.21\n");
        assert_eq!(scan.names, vec!["module", "go"]);
        assert!(scan.declared_version("module").is_none());
        // "1.21" leads with a digit, so "go 1.21" does capture a version
        assert_eq!(scan.declared_version("go"), Some("1.21"));
    }

    #[test]
    fn test_name_only_lines() {
        let scan = parse_str("requests\nflask\n");
        assert_eq!(scan.names, vec!["requests", "flask"]);
        assert!(scan.declared_version("requests").is_none());
    }

    #[test]
    fn test_looks_like_version() {
        assert!(looks_like_version("1.2.3"));
        assert!(looks_like_version("v1.2.3"));
        assert!(looks_like_version("2.0.0-beta"));
        assert!(!looks_like_version("latest"));
        assert!(!looks_like_version("v-next"));
    }

    #[test]
    fn test_records_carry_source_location() {
        let scan = parse_str("github.com/example/lib v1.2.3\n");
        assert_eq!(
            scan.records["github.com/example/lib"]
                .source_location
                .as_deref(),
            Some("go.mod")
        );
    }

    #[test]
    fn test_reparse_yields_identical_sequence() {
        let content = "# header\nalpha v1.0.0\nbeta v2.0.0\n";
        let first = parse_str(content);
        let second = parse_str(content);
        assert_eq!(first.names, second.names);
        assert_eq!(first.records, second.records);
    }
}
