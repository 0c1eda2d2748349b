use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "buildstamp.toml";

/// Represents the complete configuration for build-stamp.
///
/// Contains the file naming conventions and the output formatting options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

fn default_version_file() -> String {
    "Versioning.swift".to_string()
}

fn default_readme_file() -> String {
    "README.md".to_string()
}

fn default_version_token() -> String {
    "Versioning".to_string()
}

fn default_readme_token() -> String {
    "README".to_string()
}

/// Which files are stamped.
///
/// The `*_file` names are looked up in the working directory when no argument
/// names that file; an argument is adopted when its file name contains a `*_token`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_readme_file")]
    pub readme_file: String,

    #[serde(default = "default_version_token")]
    pub version_token: String,

    #[serde(default = "default_readme_token")]
    pub readme_token: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            version_file: default_version_file(),
            readme_file: default_readme_file(),
            version_token: default_version_token(),
            readme_token: default_readme_token(),
        }
    }
}

fn default_indent() -> String {
    "    ".to_string()
}

fn default_uppercase_build_id() -> bool {
    true
}

/// How rewritten lines look.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatConfig {
    /// Leading whitespace of a rewritten version-file line whose original has none
    #[serde(default = "default_indent")]
    pub indent: String,

    #[serde(default = "default_uppercase_build_id")]
    pub uppercase_build_id: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            indent: default_indent(),
            uppercase_build_id: default_uppercase_build_id(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildstamp.toml` in current directory
/// 3. `.buildstamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
