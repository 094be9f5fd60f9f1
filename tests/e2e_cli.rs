//! End-to-end CLI tests for comptree.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get a command pointing to the comptree binary
fn comptree() -> Command {
    cargo_bin_cmd!("comptree")
}

/// Copy the demo-app fixture into a temp dir so runs never write into the
/// repo tree.
fn demo_app() -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    copy_dir_all(&fixtures_path().join("demo-app"), temp.path()).expect("copy fixture");
    temp
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        comptree()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("comptree"))
            .stdout(predicate::str::contains("generate"))
            .stdout(predicate::str::contains("parse"));
    }

    #[test]
    fn shows_version() {
        comptree()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_flags() {
        comptree()
            .arg("--frobnicate")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown argument"));
    }
}

mod generate_mode {
    use super::*;

    #[test]
    fn emits_the_forest_as_json() {
        let app = demo_app();

        let output = comptree()
            .current_dir(app.path())
            .args(["generate", "--root", "App.jsx"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let forest: serde_json::Value =
            serde_json::from_slice(&output).expect("stdout is JSON");
        let records = forest.as_array().expect("array of records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], 0);

        let tree: serde_json::Value =
            serde_json::from_str(records[0]["data"].as_str().expect("data string"))
                .expect("data is JSON");
        assert_eq!(tree["name"], "App");

        let children = tree["children"].as_array().expect("children");
        let names: Vec<&str> = children
            .iter()
            .map(|c| c["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, vec!["Header", "Footer", "Badge"]);

        // Badge shows up again nested under Footer.
        assert_eq!(children[1]["children"][0]["name"], "Badge");
    }

    #[test]
    fn client_flag_selects_the_project() {
        let app = demo_app();

        comptree()
            .args(["--client", &app.path().to_string_lossy(), "--root", "App.jsx"])
            .assert()
            .success()
            .stdout(predicate::str::contains("App"));
    }

    #[test]
    fn writes_component_logs_under_client_root() {
        let app = demo_app();

        comptree()
            .current_dir(app.path())
            .args(["--root", "App.jsx"])
            .assert()
            .success();

        let logs = app.path().join(".comptree/logs/componentASTs");
        assert!(logs.join("App.json").exists());
        assert!(logs.join("Badge.json").exists());
    }

    #[test]
    fn invalid_root_component_fails() {
        let app = demo_app();

        comptree()
            .current_dir(app.path())
            .args(["--root", "helpers/format.js"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot recognize"));
    }

    #[test]
    fn missing_root_component_fails() {
        let app = demo_app();

        comptree()
            .current_dir(app.path())
            .args(["--root", "Nope.jsx"])
            .assert()
            .failure();
    }

    #[test]
    fn pretty_flag_formats_output() {
        let app = demo_app();

        comptree()
            .current_dir(app.path())
            .args(["--root", "App.jsx", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"id\": 0"));
    }
}

mod parse_mode {
    use super::*;

    #[test]
    fn dumps_a_module_summary_next_to_cwd() {
        let app = demo_app();

        comptree()
            .current_dir(app.path())
            .args(["parse", "src/App.jsx"])
            .assert()
            .success()
            .stdout(predicate::str::contains("AppAST.json"));

        let dumped = app.path().join("AppAST.json");
        assert!(dumped.exists());
        let summary: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dumped).expect("read dump"))
                .expect("summary JSON");
        assert_eq!(summary["name"], "App");
        assert!(
            summary["rendered_elements"]
                .as_array()
                .expect("rendered elements")
                .iter()
                .any(|v| v == "Badge")
        );
    }

    #[test]
    fn parse_without_a_file_fails() {
        comptree()
            .arg("parse")
            .assert()
            .failure()
            .stderr(predicate::str::contains("parse expects a file"));
    }
}

fn copy_dir_all(src: &std::path::Path, dst: &std::path::Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        let dest_path = dst.join(entry.file_name());
        if ty.is_dir() {
            copy_dir_all(&entry.path(), &dest_path)?;
        } else {
            std::fs::copy(entry.path(), dest_path)?;
        }
    }
    Ok(())
}
