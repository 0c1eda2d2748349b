// tests/config_test.rs
use build_stamp::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.files.version_file, "Versioning.swift");
    assert_eq!(config.files.readme_file, "README.md");
    assert_eq!(config.files.version_token, "Versioning");
    assert_eq!(config.files.readme_token, "README");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[files]
readme_file = "CHANGES.md"
readme_token = "CHANGES"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.files.readme_file, "CHANGES.md");
    assert_eq!(config.files.readme_token, "CHANGES");
    // untouched keys keep their defaults
    assert_eq!(config.files.version_file, "Versioning.swift");
    assert_eq!(config.format.indent, "    ");
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/buildstamp.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.files.version_file, "BuildInfo.swift");
    assert_eq!(config.format.indent, "\t");
    assert!(!config.format.uppercase_build_id);
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[format\nindent = 4").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
#[serial]
fn test_project_config_in_working_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[files]\nversion_file = \"AppVersion.swift\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(config.unwrap().files.version_file, "AppVersion.swift");
}
