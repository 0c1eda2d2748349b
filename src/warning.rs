use std::fmt;
use std::path::PathBuf;

use crate::domain::MarkerKind;

/// Non-fatal conditions noticed during a run.
/// These are reported to the user but never stop the stamp.
#[derive(Debug, Clone, PartialEq)]
pub enum StampWarning {
    /// Documentation file has no "Most recent build:" line; it is left untouched
    ReadmeMarkerMissing { path: PathBuf },
    /// Marker appears on more than one line; only the first one is used
    DuplicateMarker {
        marker: MarkerKind,
        document: String,
        line: usize,
        count: usize,
    },
    /// Argument names neither a version file nor a documentation file
    UnrecognizedArgument { argument: String },
}

impl fmt::Display for StampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampWarning::ReadmeMarkerMissing { path } => {
                write!(
                    f,
                    "No 'Most recent build:' line in {}, leaving it unchanged",
                    path.display()
                )
            }
            StampWarning::DuplicateMarker {
                marker,
                document,
                line,
                count,
            } => {
                write!(
                    f,
                    "Found {} {} lines in {}, using line {}",
                    count, marker, document, line
                )
            }
            StampWarning::UnrecognizedArgument { argument } => {
                write!(f, "Ignoring argument '{}'", argument)
            }
        }
    }
}
