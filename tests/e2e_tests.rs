//! End-to-end tests for the catup CLI
//!
//! These tests verify:
//! - Input validation happens before any lookup
//! - CLI produces correct JSON output schema
//! - Exit codes are correct for various scenarios
//!
//! No test touches the network: lookups go to a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A repository URL that refuses connections immediately
const DEAD_REPOSITORY: &str = "http://127.0.0.1:1";

const SINGLE_LIBRARY: &str = r#"[versions]
bar = "1.2.3"

[libraries]
bar = { module = "com.example:bar", version.ref = "bar" }
"#;

const NO_LIBRARIES: &str = r#"[versions]
kotlin = "2.0.0"

[plugins]
kotlin-android = { id = "org.jetbrains.kotlin.android", version.ref = "kotlin" }
"#;

fn catup() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catup"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a project directory with `gradle/libs.versions.toml`
fn create_test_project(catalog: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::create_dir(temp_dir.path().join("gradle")).unwrap();
    fs::write(temp_dir.path().join("gradle/libs.versions.toml"), catalog).unwrap();
    temp_dir
}

mod input_validation_tests {
    use super::*;

    #[test]
    fn test_non_toml_file_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("build.gradle");
        fs::write(&path, "plugins { id 'java' }").unwrap();

        catup()
            .arg(&path)
            .arg("--repository")
            .arg(DEAD_REPOSITORY)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not a TOML"));
    }

    #[test]
    fn test_nonexistent_path() {
        catup()
            .arg("/nonexistent/path/libs.versions.toml")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn test_directory_without_catalog() {
        let temp_dir = tempfile::tempdir().unwrap();

        catup()
            .arg(temp_dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("no libs.versions.toml found"));
    }

    #[test]
    fn test_conflicting_flags() {
        let temp_dir = create_test_project(NO_LIBRARIES);

        catup()
            .arg(temp_dir.path())
            .args(["--quiet", "--verbose"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("conflicting options"));
    }

    #[test]
    fn test_invalid_repository_url() {
        catup()
            .args(["--repository", "ftp://example.com/maven"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported scheme"));
    }
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_exit_code_nothing_to_check() {
        let temp_dir = create_test_project(NO_LIBRARIES);

        catup()
            .arg(temp_dir.path())
            .arg("--no-color")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("No libraries to check"));
    }

    #[test]
    fn test_exit_code_lookup_failed() {
        let temp_dir = create_test_project(SINGLE_LIBRARY);

        catup()
            .arg(temp_dir.path())
            .args(["--no-color", "--repository", DEAD_REPOSITORY])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("? bar com.example:bar 1.2.3 (lookup failed"));
    }

    #[test]
    fn test_exit_code_help() {
        catup()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--repository"));
    }

    #[test]
    fn test_exit_code_version() {
        catup()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("catup"));
    }
}

mod json_output_tests {
    use super::*;

    #[test]
    fn test_json_output_schema() {
        let temp_dir = create_test_project(SINGLE_LIBRARY);

        let output = catup()
            .arg(temp_dir.path())
            .args(["--json", "--repository", DEAD_REPOSITORY])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(2));
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

        assert!(json["manifest"]
            .as_str()
            .unwrap()
            .ends_with("libs.versions.toml"));
        assert_eq!(json["cancelled"], false);
        assert_eq!(json["summary"]["total"], 1);
        assert_eq!(json["summary"]["lookup_failed"], 1);

        let result = &json["results"][0];
        assert_eq!(result["key"], "bar");
        assert_eq!(result["group"], "com.example");
        assert_eq!(result["artifact"], "bar");
        assert_eq!(result["declared"], "1.2.3");
        assert!(result["latest"].is_null());
        assert_eq!(result["up_to_date"], false);
        assert_eq!(result["status"], "lookup_failed");
    }

    #[test]
    fn test_json_output_empty_catalog() {
        let temp_dir = create_test_project(NO_LIBRARIES);

        let output = catup()
            .arg(temp_dir.path().join("gradle/libs.versions.toml"))
            .arg("--json")
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["results"].as_array().unwrap().len(), 0);
        assert_eq!(json["summary"]["total"], 0);
    }
}

mod cli_options_tests {
    use super::*;

    #[test]
    fn test_quiet_mode_prints_summary_only() {
        let temp_dir = create_test_project(SINGLE_LIBRARY);

        catup()
            .arg(temp_dir.path())
            .args(["-q", "--no-color", "--repository", DEAD_REPOSITORY])
            .assert()
            .code(2)
            .stdout("1 library checked: 0 up to date, 0 outdated, 1 lookup failed\n");
    }

    #[test]
    fn test_verbose_mode_shows_declaration_line() {
        let temp_dir = create_test_project(SINGLE_LIBRARY);

        catup()
            .arg(temp_dir.path())
            .args(["--verbose", "--no-color", "--repository", DEAD_REPOSITORY])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("libs.versions.toml:2)"))
            .stderr(predicate::str::contains("Repository: 127.0.0.1:1"));
    }

    #[test]
    fn test_catalog_found_in_project_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("libs.versions.toml"), NO_LIBRARIES).unwrap();

        catup().arg(temp_dir.path()).assert().code(0);
    }
}
