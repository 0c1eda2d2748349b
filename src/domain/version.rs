use std::fmt;

use super::document::VersionDocument;
use super::marker::MarkerKind;
use crate::error::Result;

/// Product version as declared in the version file.
///
/// Components are kept as text since they are only ever echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: String,
    pub minor: String,
    pub tag: String,
}

impl VersionInfo {
    /// Create a new version
    pub fn new(major: impl Into<String>, minor: impl Into<String>, tag: impl Into<String>) -> Self {
        VersionInfo {
            major: major.into(),
            minor: minor.into(),
            tag: tag.into(),
        }
    }

    /// Read major, minor and tag from their marker lines
    pub fn from_document(doc: &VersionDocument) -> Result<Self> {
        Ok(VersionInfo {
            major: doc.string_value(MarkerKind::MajorVersion)?,
            minor: doc.string_value(MarkerKind::MinorVersion)?,
            tag: doc.string_value(MarkerKind::VersionTag)?,
        })
    }
}

/// "major.minor", followed by " tag" unless the tag is empty
impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if !self.tag.is_empty() {
            write!(f, " {}", self.tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Document;
    use crate::error::StampError;

    #[test]
    fn test_version_display() {
        assert_eq!(VersionInfo::new("1", "2", "").to_string(), "1.2");
        assert_eq!(VersionInfo::new("3", "14", "beta").to_string(), "3.14 beta");
    }

    #[test]
    fn test_from_document() {
        let doc = Document::from_text(
            "Versioning.swift",
            concat!(
                "    public static let MajorVersion: String = \"2\"\n",
                "    public static let MinorVersion: String = \"0\"\n",
                "    public static let Tag: String = \"alpha\"\n",
            ),
        );
        let version = VersionInfo::from_document(&doc).unwrap();
        assert_eq!(version, VersionInfo::new("2", "0", "alpha"));
    }

    #[test]
    fn test_from_document_missing_tag() {
        let doc = Document::from_text(
            "Versioning.swift",
            "    public static let MajorVersion: String = \"2\"\n    public static let MinorVersion: String = \"0\"\n",
        );
        let err = VersionInfo::from_document(&doc).unwrap_err();
        assert!(matches!(
            err,
            StampError::MarkerNotFound {
                marker: MarkerKind::VersionTag,
                ..
            }
        ));
    }
}
