//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build the text and are unit tested; the
//! `display_*` functions only print it.

use console::style;

use crate::cli::BumpReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Summary line for a bump: `Bumped version from <old> to <new>`.
///
/// Dry runs are phrased conditionally so they cannot be mistaken for a write.
pub fn format_bump_summary(report: &BumpReport) -> String {
    if report.written {
        format!(
            "Bumped version from {} to {}",
            report.old_version, report.new_version
        )
    } else {
        format!(
            "Would bump version from {} to {} (dry run)",
            report.old_version, report.new_version
        )
    }
}

/// One-line explanation of why the bump level was chosen.
pub fn format_bump_reason(report: &BumpReport) -> String {
    format!(
        "Branch '{}' selects a {} bump",
        report.branch, report.level
    )
}

/// Print the outcome of a bump.
///
/// The summary goes to stdout unstyled so scripts can read it.
pub fn display_bump_summary(report: &BumpReport) {
    if !report.written {
        display_status(&format_bump_reason(report));
    }
    println!("{}", format_bump_summary(report));
}

/// Print why no bump happened.
pub fn display_branch_unavailable(reason: &str) {
    display_error(reason);
    display_status("Version file left unchanged.");
}
