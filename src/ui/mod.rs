//! User interface module - run reporting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Reporting a finished stamp run

pub mod formatter;

pub use formatter::{
    display_build_state, display_error, display_status, display_success, display_warning,
};

use crate::cli::orchestration::StampReport;

/// Prints the outcome of a stamp run.
///
/// Warnings are always shown; the status and success lines are skipped when `quiet`.
pub fn display_report(report: &StampReport, quiet: bool) {
    for warning in &report.warnings {
        display_warning(warning);
    }
    if quiet {
        return;
    }

    display_build_state(&report.state, report.dry_run);

    if report.dry_run {
        display_status(&format!(
            "Would write results to {}",
            report.version_path.display()
        ));
        if let (true, Some(path)) = (report.readme_updated, &report.readme_path) {
            display_status(&format!("Would write results to {}", path.display()));
        }
        return;
    }

    display_success(&format!(
        "Wrote results to {}",
        report.version_path.display()
    ));
    if let (true, Some(path)) = (report.readme_updated, &report.readme_path) {
        display_success(&format!("Wrote results to {}", path.display()));
    }
}
