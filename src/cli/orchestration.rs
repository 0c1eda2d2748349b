//! Main stamping workflow
//!
//! Sequences one run: resolve the target files, read both, stamp both in
//! memory, then write them back. Nothing is written until every read, marker
//! lookup and value computation has succeeded. Kept free of clap so the
//! workflow can be driven programmatically.

use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::config::{Config, FilesConfig};
use crate::domain::{BuildState, Document, MarkerKind};
use crate::error::{Result, StampError};
use crate::fs_ops;
use crate::stamper;
use crate::ui;
use crate::warning::StampWarning;

/// Arguments for the stamp workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StampArgs {
    /// Path arguments, matched against the configured file name tokens
    pub paths: Vec<PathBuf>,

    /// Directory searched for the default file names
    pub working_dir: PathBuf,

    /// Compute and report without writing anything
    pub dry_run: bool,

    /// Suppress the status lines printed while reading
    pub quiet: bool,
}

impl StampArgs {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        StampArgs {
            paths,
            working_dir: PathBuf::from("."),
            dry_run: false,
            quiet: false,
        }
    }
}

/// Files named on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplicitTargets {
    pub version: Option<PathBuf>,
    pub readme: Option<PathBuf>,
}

/// Result of a successful stamp workflow
#[derive(Debug, Clone, PartialEq)]
pub struct StampReport {
    /// The version file that was stamped
    pub version_path: PathBuf,

    /// The documentation file considered, if any
    pub readme_path: Option<PathBuf>,

    /// Whether the documentation summary line was rewritten
    pub readme_updated: bool,

    pub state: BuildState,

    pub warnings: Vec<StampWarning>,

    /// True when nothing was written to disk
    pub dry_run: bool,
}

fn file_name_contains(path: &Path, token: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(token))
        .unwrap_or(false)
}

/// Sorts path arguments into version and documentation files.
///
/// An argument whose file name contains the version token is the version file,
/// otherwise one containing the documentation token is the documentation file.
/// The first match of each kind wins; anything else is ignored with a warning.
pub fn classify_paths(
    paths: &[PathBuf],
    files: &FilesConfig,
) -> (ExplicitTargets, Vec<StampWarning>) {
    let mut targets = ExplicitTargets::default();
    let mut warnings = Vec::new();

    for path in paths {
        let slot = if file_name_contains(path, &files.version_token) {
            &mut targets.version
        } else if file_name_contains(path, &files.readme_token) {
            &mut targets.readme
        } else {
            warnings.push(StampWarning::UnrecognizedArgument {
                argument: path.display().to_string(),
            });
            continue;
        };

        if slot.is_none() {
            *slot = Some(path.clone());
        } else {
            warnings.push(StampWarning::UnrecognizedArgument {
                argument: path.display().to_string(),
            });
        }
    }

    (targets, warnings)
}

/// Reads a document, announcing it on stdout unless `quiet`
fn read_with_status(path: &Path, quiet: bool) -> Result<Document> {
    if !quiet {
        ui::display_status(&format!("Attempting to read {}", path.display()));
    }
    let doc = fs_ops::read_document(path)?;
    if !quiet {
        ui::display_status(&format!("Read {} lines in {}", doc.len(), path.display()));
    }
    Ok(doc)
}

/// Explicit path if given, else the default name in `working_dir` when it exists
fn resolve(explicit: Option<PathBuf>, working_dir: &Path, default_name: &str) -> Option<PathBuf> {
    explicit.or_else(|| {
        let candidate = working_dir.join(default_name);
        candidate.is_file().then_some(candidate)
    })
}

/// Main stamp workflow
///
/// 1. Match arguments to the version and documentation files
/// 2. Read both documents
/// 3. Stamp the version document, then the documentation summary line
/// 4. Write the version file, then the documentation file (skipped on dry run)
///
/// # Errors
/// * `Configuration` - documentation file named but no version file available
/// * `FileNotFound` - no version file, or a named documentation file is missing
/// * `MarkerNotFound` / `Parse` - the version file lacks or garbles a build field
/// * `Io` - reading or writing failed
pub fn run_stamp(args: &StampArgs, config: &Config, clock: &dyn Clock) -> Result<StampReport> {
    let (explicit, mut warnings) = classify_paths(&args.paths, &config.files);
    let readme_named = explicit.readme.is_some();

    let version_path = explicit
        .version
        .unwrap_or_else(|| args.working_dir.join(&config.files.version_file));
    if !version_path.is_file() {
        if readme_named {
            return Err(StampError::configuration(format!(
                "A documentation file was given but no version file was found at {}",
                version_path.display()
            )));
        }
        return Err(StampError::FileNotFound(version_path));
    }
    let readme_path = resolve(explicit.readme, &args.working_dir, &config.files.readme_file);

    let mut version_doc = read_with_status(&version_path, args.quiet)?;
    let mut readme_doc = match &readme_path {
        Some(path) => Some(read_with_status(path, args.quiet)?),
        None => None,
    };

    // Version data is only needed when there is a summary line to rewrite
    let summary_present = readme_doc
        .as_ref()
        .is_some_and(|doc| doc.locate(MarkerKind::MostRecentBuild).is_some());
    if let (Some(path), false) = (&readme_path, summary_present) {
        warnings.push(StampWarning::ReadmeMarkerMissing { path: path.clone() });
    }

    let stamp = stamper::stamp_version(
        &mut version_doc,
        clock,
        &config.format,
        summary_present,
    )?;
    warnings.extend(stamp.warnings);

    let readme_updated = match &mut readme_doc {
        Some(doc) if summary_present => stamper::stamp_readme(doc, &stamp.state)?,
        _ => false,
    };

    if !args.dry_run {
        fs_ops::write_document(&version_path, &version_doc)?;
        if let (true, Some(doc), Some(path)) = (readme_updated, &readme_doc, &readme_path) {
            fs_ops::write_document(path, doc)?;
        }
    }

    Ok(StampReport {
        version_path,
        readme_path,
        readme_updated,
        state: stamp.state,
        warnings,
        dry_run: args.dry_run,
    })
}
