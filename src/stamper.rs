//! In-memory stamping of the version and documentation documents

use crate::clock::Clock;
use crate::config::FormatConfig;
use crate::domain::build::{self, BuildState};
use crate::domain::{MarkerKind, ReadmeDocument, VersionDocument, VersionInfo};
use crate::error::{Result, StampError};
use crate::warning::StampWarning;

/// New value for a marker line
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Int(i64),
    Text(&'a str),
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Builds the replacement line `<indent><declaration> = <value>`
pub fn marker_line(indent: &str, kind: MarkerKind, value: &FieldValue<'_>) -> Result<String> {
    let declaration = kind.declaration().ok_or_else(|| {
        StampError::configuration(format!("The {} line is never rewritten", kind))
    })?;
    Ok(format!("{}{} = {}", indent, declaration, value))
}

/// Leading whitespace of `line`, or `fallback` when it has none
pub fn line_indent<'a>(line: &'a str, fallback: &'a str) -> &'a str {
    let body = line.trim_start();
    let leading = &line[..line.len() - body.len()];
    if leading.is_empty() {
        fallback
    } else {
        leading
    }
}

/// Warnings for markers that appear on more than one line
fn duplicate_warnings(doc: &VersionDocument, kinds: &[MarkerKind]) -> Vec<StampWarning> {
    kinds
        .iter()
        .filter_map(|&kind| {
            let count = doc.occurrences(kind);
            let index = doc.locate(kind)?;
            (count > 1).then(|| StampWarning::DuplicateMarker {
                marker: kind,
                document: doc.name().to_string(),
                line: index + 1,
                count,
            })
        })
        .collect()
}

/// Result of stamping the version document
#[derive(Debug, Clone, PartialEq)]
pub struct VersionStamp {
    pub state: BuildState,
    pub warnings: Vec<StampWarning>,
}

/// Compute the next build values and rewrite the build lines of `doc`.
///
/// Every marker is located and parsed before the first line is replaced, so
/// on error `doc` is unchanged. When `with_version` is set, major/minor/tag
/// are read too and carried in the returned state.
pub fn stamp_version(
    doc: &mut VersionDocument,
    clock: &dyn Clock,
    format: &FormatConfig,
    with_version: bool,
) -> Result<VersionStamp> {
    let increment = doc.int_value(MarkerKind::BuildIncrement)?;
    let previous = doc.int_value(MarkerKind::BuildNumber)?;
    let build_number = build::next_build_number(previous, increment)?;

    let number_index = doc.require(MarkerKind::BuildNumber)?;
    let date_index = doc.require(MarkerKind::BuildDate)?;
    let time_index = doc.require(MarkerKind::BuildTime)?;
    let id_index = doc.require(MarkerKind::BuildID)?;

    let version = if with_version {
        Some(VersionInfo::from_document(doc)?)
    } else {
        None
    };

    let now = clock.now();
    let state = BuildState {
        build_number,
        build_date: build::format_build_date(now.date()),
        build_time: build::format_build_time(now.time()),
        build_id: build::format_build_id(clock.build_id(), format.uppercase_build_id),
        version,
    };

    let mut checked = vec![MarkerKind::BuildIncrement];
    checked.extend(MarkerKind::BUILD_FIELDS);
    if with_version {
        checked.extend([
            MarkerKind::MajorVersion,
            MarkerKind::MinorVersion,
            MarkerKind::VersionTag,
        ]);
    }
    let warnings = duplicate_warnings(doc, &checked);

    let indent_of = |index: usize| line_indent(&doc.lines()[index], &format.indent).to_string();
    let replacements = [
        (
            number_index,
            marker_line(
                &indent_of(number_index),
                MarkerKind::BuildNumber,
                &FieldValue::Int(build_number),
            )?,
        ),
        (
            date_index,
            marker_line(
                &indent_of(date_index),
                MarkerKind::BuildDate,
                &FieldValue::Text(&state.build_date),
            )?,
        ),
        (
            time_index,
            marker_line(
                &indent_of(time_index),
                MarkerKind::BuildTime,
                &FieldValue::Text(&state.build_time),
            )?,
        ),
        (
            id_index,
            marker_line(
                &indent_of(id_index),
                MarkerKind::BuildID,
                &FieldValue::Text(&state.build_id),
            )?,
        ),
    ];
    for (index, line) in replacements {
        doc.replace_line(index, line)?;
    }

    Ok(VersionStamp { state, warnings })
}

/// Replace the "Most recent build:" line of `doc` with the summary for `state`.
///
/// Returns `Ok(false)` and leaves `doc` untouched when the line is missing.
/// A state without version data is a configuration error.
pub fn stamp_readme(doc: &mut ReadmeDocument, state: &BuildState) -> Result<bool> {
    let summary = state.summary_line().ok_or_else(|| {
        StampError::configuration("A documentation file needs version data from the version file")
    })?;

    match doc.locate(MarkerKind::MostRecentBuild) {
        Some(index) => {
            doc.replace_line(index, summary)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
