//! Pure formatting functions for UI output.
//!
//! Every diagnostic goes to standard output, errors included.

use crate::domain::BuildState;
use crate::warning::StampWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    println!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Warning line as printed, colour codes included.
pub fn format_warning(warning: &StampWarning) -> String {
    format!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning)
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &StampWarning) {
    println!("{}", format_warning(warning));
}

/// Lines describing the computed build values, without colour codes.
///
/// The version line only appears when version data was read.
pub fn build_state_lines(state: &BuildState) -> Vec<String> {
    let mut lines = vec![
        format!("Build:      {}", state.build_number),
        format!("Build date: {}", state.build_date),
        format!("Build time: {}", state.build_time),
        format!("Build ID:   {}", state.build_id),
    ];
    if let Some(version) = &state.version {
        lines.insert(0, format!("Version:    {}", version));
    }
    lines
}

/// Display the computed build values.
///
/// # Arguments
/// * `state` - Values computed for this run
/// * `dry_run` - Whether the values were written or only previewed
pub fn display_build_state(state: &BuildState, dry_run: bool) {
    if dry_run {
        println!("\n\x1b[1mDry run - would stamp:\x1b[0m");
    } else {
        println!("\n\x1b[1mStamped:\x1b[0m");
    }
    for line in build_state_lines(state) {
        println!("  {}", line);
    }
}
