//! User interface module - terminal output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Printing, with styling through `console`

pub mod formatter;

pub use formatter::{format_comparison, format_report, VersionReport};

use console::style;

/// Enable or disable ANSI styling for everything printed afterwards.
pub fn set_color(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print the parsed fields of one version under a bold heading.
pub fn display_report(report: &VersionReport) {
    println!("{}", style(&report.version).bold());
    for line in format_report(report) {
        println!("{}", line);
    }
}
