//! Integration tests for the tkb command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture_path, fixtures_dir, FULL_TICKET};

/// tkb with an isolated (absent) config file and no log filter override.
fn tkb(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tkb").expect("tkb binary is built");
    cmd.env_remove("TKB_LOG")
        .env_remove("TKB_CONFIG")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

// ============================================================================
// Extract Tests
// ============================================================================

#[test]
fn extract_directory_prints_summary() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .arg("extract")
        .arg(fixtures_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 ticket files"))
        .stdout(predicate::str::contains("INC0001001: 3 KB entries"))
        .stdout(predicate::str::contains("INC0001002: no activity stream"))
        .stdout(predicate::str::contains("KB entries found  : 4"))
        .stdout(predicate::str::contains("Author     : Jordan Lee"));
}

#[test]
fn extract_json_report() {
    let config_dir = TempDir::new().unwrap();

    let output = tkb(&config_dir)
        .args(["extract", "--format", "json", "--no-parallel"])
        .arg(fixtures_dir())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tickets_processed"], 3);
    assert_eq!(json["entries"].as_array().unwrap().len(), 4);
    assert_eq!(json["entries"][1]["visibility"], "internal");
}

#[test]
fn extract_jsonl_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out = config_dir.path().join("entries.jsonl");

    tkb(&config_dir)
        .args(["extract", "--format", "jsonl", "--output"])
        .arg(&out)
        .arg(fixture_path(FULL_TICKET))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn kb_type_flag_overrides_config() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .args(["extract", "--kb-type", "Field changes", "--sample", "0"])
        .arg(fixture_path(FULL_TICKET))
        .assert()
        .success()
        .stdout(predicate::str::contains("INC0001001: 1 KB entries"))
        .stdout(predicate::str::contains("SAMPLE KB ENTRIES").not());
}

#[test]
fn extract_empty_directory_fails() {
    let config_dir = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();

    tkb(&config_dir)
        .arg("extract")
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No ticket files found"));
}

#[test]
fn missing_file_is_reported_not_fatal() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .arg("extract")
        .arg(fixture_path("INC0404040.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("INC0404040: failed: File not found"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_init_writes_defaults_once() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config_dir.path().join("config.toml").exists());

    tkb(&config_dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tkb(&config_dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_reflects_file() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[batch]\nfile_prefix = \"RITM\"\n",
    )
    .unwrap();

    tkb(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file_prefix = \"RITM\""))
        .stdout(predicate::str::contains("[extraction]"));
}

#[test]
fn invalid_config_fails_extract() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[extraction]\nkb_types = []\n",
    )
    .unwrap();

    tkb(&config_dir)
        .arg("extract")
        .arg(fixture_path(FULL_TICKET))
        .assert()
        .failure()
        .stderr(predicate::str::contains("kb_types"));
}

#[test]
fn config_path_prints_override() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn completions_for_bash() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tkb"));
}

#[test]
fn help_lists_subcommands() {
    let config_dir = TempDir::new().unwrap();

    tkb(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("config"));
}
