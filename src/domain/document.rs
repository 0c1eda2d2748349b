use super::extract;
use super::marker::{self, MarkerKind};
use crate::error::{Result, StampError};

/// A text file held as an ordered list of lines.
///
/// Lines are replaced in place; the document is never reordered or resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    lines: Vec<String>,
}

/// The version-tracking source file
pub type VersionDocument = Document;

/// The documentation file carrying the "Most recent build:" line
pub type ReadmeDocument = Document;

impl Document {
    /// Split `text` into lines, dropping every CR+LF terminator.
    ///
    /// `name` only appears in diagnostics.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        Document {
            name: name.into(),
            lines,
        }
    }

    /// Join the lines back together with a single "\n" between each pair
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn locate(&self, kind: MarkerKind) -> Option<usize> {
        marker::locate(&self.lines, kind)
    }

    /// Like [`Document::locate`] but a missing marker is an error
    pub fn require(&self, kind: MarkerKind) -> Result<usize> {
        self.locate(kind)
            .ok_or_else(|| StampError::marker_not_found(kind, self.name.clone()))
    }

    pub fn occurrences(&self, kind: MarkerKind) -> usize {
        marker::count_occurrences(&self.lines, kind)
    }

    /// Integer value of the first line carrying `kind`
    pub fn int_value(&self, kind: MarkerKind) -> Result<i64> {
        let index = self.require(kind)?;
        extract::int_value(&self.lines[index])
    }

    /// Unquoted string value of the first line carrying `kind`
    pub fn string_value(&self, kind: MarkerKind) -> Result<String> {
        let index = self.require(kind)?;
        extract::string_value(&self.lines[index])
    }

    /// Replace the whole line at `index`, returning the previous content
    pub fn replace_line(&mut self, index: usize, line: impl Into<String>) -> Result<String> {
        let len = self.lines.len();
        let slot = self.lines.get_mut(index).ok_or_else(|| {
            StampError::parse(format!(
                "Line {} is out of range for {} ({} lines)",
                index + 1,
                self.name,
                len
            ))
        })?;
        Ok(std::mem::replace(slot, line.into()))
    }
}
