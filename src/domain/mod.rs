//! Domain logic - marker lines, documents and build values, independent of the filesystem

pub mod build;
pub mod document;
pub mod extract;
pub mod marker;
pub mod version;

pub use build::BuildState;
pub use document::{Document, ReadmeDocument, VersionDocument};
pub use marker::MarkerKind;
pub use version::VersionInfo;
