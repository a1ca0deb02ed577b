//! End-to-end tests for the depfresh CLI
//!
//! These tests verify:
//! - Exit codes for fatal, fresh, and misconfigured runs
//! - JSON output schema
//!
//! Every scenario here completes without network access: fatal paths
//! fail before resolution starts, and the fresh runs contain only
//! entries the engine skips (no version to compare against).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn depfresh() -> Command {
    Command::cargo_bin("depfresh").expect("binary should build")
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_empty_directory_is_fatal() {
        let temp_dir = create_test_dir();

        depfresh()
            .arg(temp_dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("no known dependency file"));
    }

    #[test]
    fn test_unsupported_manifest_is_fatal() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("build.gradle");
        fs::write(&path, "").unwrap();

        depfresh()
            .arg(temp_dir.path())
            .arg("--manifest")
            .arg(&path)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unsupported manifest format"));
    }

    #[test]
    fn test_non_cyclonedx_sbom_is_fatal() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("bom.json"),
            r#"{"bomFormat": "SPDX", "components": []}"#,
        )
        .unwrap();

        depfresh()
            .arg(temp_dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("expected CycloneDX"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("go.mod"), "some/module v1.0.0\n").unwrap();

        depfresh()
            .arg(temp_dir.path())
            .arg("--config")
            .arg(temp_dir.path().join("missing.toml"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("config file not found"));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("go.mod"), "some/module v1.0.0\n").unwrap();
        let config = temp_dir.path().join("repos.toml");
        fs::write(&config, "[[repos]\nbroken").unwrap();

        depfresh()
            .arg(temp_dir.path())
            .arg("--config")
            .arg(&config)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("failed to parse TOML"));
    }

    // Constraint-only entries have no version to compare, so the run
    // finishes fresh without touching any registry.
    #[test]
    fn test_constraint_only_manifest_is_fresh() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{"dependencies": {"express": "^4.18.0"}}"#,
        )
        .unwrap();

        depfresh()
            .arg(temp_dir.path())
            .arg("--quiet")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("All dependencies are up to date."));
    }

    #[test]
    fn test_empty_sbom_is_fresh() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("bom.json"),
            r#"{"bomFormat": "CycloneDX", "components": []}"#,
        )
        .unwrap();

        depfresh()
            .arg(temp_dir.path())
            .arg("--quiet")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("All dependencies are up to date."));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_output_on_fresh_run() {
        let temp_dir = create_test_dir();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{"dependencies": {"express": "^4.18.0"}}"#,
        )
        .unwrap();

        let output = depfresh()
            .arg(temp_dir.path())
            .arg("--json")
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["classifications"].as_array().unwrap().is_empty());
        assert!(value["outdated"].as_array().unwrap().is_empty());
    }
}
