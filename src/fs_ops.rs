use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::Document;
use crate::error::{Result, StampError};

/// Display name of a path for diagnostics ("Versioning.swift")
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sibling path used while a file is rewritten
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".stamp.tmp");
    path.with_file_name(name)
}

/// Reads a UTF-8 text file into a [Document]
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(StampError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(Document::from_text(document_name(path), &text))
}

/// Replaces the file at `path` with the document's text.
///
/// Writes a temporary sibling first and renames it over the target, so the
/// target is either fully replaced or left as it was.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let tmp = temp_path(path);
    let written = fs::File::create(&tmp).and_then(|mut file| {
        file.write_all(doc.to_text().as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
