// tests/integration_test.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VERSIONING: &str = include_str!("fixtures/Versioning.swift");
const README: &str = include_str!("fixtures/README.md");

fn build_stamp() -> Command {
    Command::cargo_bin("build-stamp").unwrap()
}

#[test]
fn test_help() {
    build_stamp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build-stamp"))
        .stdout(predicate::str::contains("Stamp build number"));
}

#[test]
fn test_version_flag() {
    build_stamp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("build-stamp "));
}

#[test]
fn test_stamps_files_in_working_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Versioning.swift"), VERSIONING).unwrap();
    fs::write(dir.path().join("README.md"), README).unwrap();

    build_stamp()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Build:      42"));

    let version = fs::read_to_string(dir.path().join("Versioning.swift")).unwrap();
    assert!(version.contains("    public static let Build: Int = 42\n"));
    assert!(!version.contains("D1CF2F5A-3E14-4A4B-8E6C-2D1B0C9E3A77"));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Most recent build: **Version 1.2, Build 42, Build date: "));
}

#[test]
fn test_reports_files_as_they_are_read() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Versioning.swift"), VERSIONING).unwrap();

    build_stamp()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempting to read ./Versioning.swift"))
        .stdout(predicate::str::contains("Read 24 lines in ./Versioning.swift"));
}

#[test]
fn test_explicit_paths() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("Versioning.swift"), VERSIONING).unwrap();

    build_stamp()
        .current_dir(dir.path())
        .arg(src.join("Versioning.swift"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let version = fs::read_to_string(src.join("Versioning.swift")).unwrap();
    assert!(version.contains("public static let Build: Int = 42"));
}

#[test]
fn test_dry_run_leaves_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Versioning.swift"), VERSIONING).unwrap();

    build_stamp()
        .current_dir(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(
        fs::read_to_string(dir.path().join("Versioning.swift")).unwrap(),
        VERSIONING
    );
}

#[test]
fn test_nothing_to_update_fails() {
    let dir = TempDir::new().unwrap();

    build_stamp()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Cannot find anything to update"));
}

#[test]
fn test_readme_without_version_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), README).unwrap();

    build_stamp()
        .current_dir(dir.path())
        .arg("README.md")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration error"));

    assert_eq!(
        fs::read_to_string(dir.path().join("README.md")).unwrap(),
        README
    );
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Versioning.swift"), VERSIONING).unwrap();
    fs::write(dir.path().join("bad.toml"), "[files\n").unwrap();

    build_stamp()
        .current_dir(dir.path())
        .args(["--config", "bad.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error loading config"));
}
