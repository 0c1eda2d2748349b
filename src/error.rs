use std::path::PathBuf;

use thiserror::Error;

use crate::domain::MarkerKind;

/// Unified error type for build-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Cannot find anything to update at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not find {marker} in {document}")]
    MarkerNotFound { marker: MarkerKind, document: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in build-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        StampError::Parse(msg.into())
    }

    /// Create a configuration error with context
    pub fn configuration(msg: impl Into<String>) -> Self {
        StampError::Configuration(msg.into())
    }

    /// Create a marker-not-found error for the named document
    pub fn marker_not_found(marker: MarkerKind, document: impl Into<String>) -> Self {
        StampError::MarkerNotFound {
            marker,
            document: document.into(),
        }
    }
}
