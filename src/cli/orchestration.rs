//! Workflows behind the command-line subcommands
//!
//! Kept apart from `main.rs` so they can be driven programmatically and
//! tested without clap or a terminal.

use std::cmp::Ordering;

use crate::config::{Config, SortConfig};
use crate::domain::{compare, Version};
use crate::error::ParseError;

/// Arguments for the sort workflow
///
/// `None` flags fall back to the `[sort]` table of the configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortWorkflowArgs {
    pub inputs: Vec<String>,
    pub descending: Option<bool>,
    pub skip_invalid: Option<bool>,
}

impl SortWorkflowArgs {
    /// Settings after applying command-line overrides to `config`
    pub fn resolve(&self, config: &Config) -> SortConfig {
        SortConfig {
            descending: self.descending.unwrap_or(config.sort.descending),
            skip_invalid: self.skip_invalid.unwrap_or(config.sort.skip_invalid),
        }
    }
}

/// Result of a sort
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    /// Valid inputs in precedence order
    pub sorted: Vec<Version>,

    /// Inputs dropped because they did not parse; only populated when
    /// invalid inputs are skipped
    pub skipped: Vec<ParseError>,
}

/// Parses every input and sorts by precedence.
///
/// The sort is stable, so inputs of equal precedence (for example differing
/// only in build metadata) keep their relative order.
///
/// # Returns
/// * `Ok(SortOutcome)` - Sorted versions, plus skipped inputs
/// * `Err` - The first invalid input, unless `skip_invalid` is set
pub fn run_sort_workflow(
    args: &SortWorkflowArgs,
    config: &Config,
) -> Result<SortOutcome, ParseError> {
    let settings = args.resolve(config);

    let mut sorted = Vec::with_capacity(args.inputs.len());
    let mut skipped = Vec::new();

    for input in &args.inputs {
        match Version::parse(input) {
            Ok(version) => sorted.push(version),
            Err(e) if settings.skip_invalid => skipped.push(e),
            Err(e) => return Err(e),
        }
    }

    if settings.descending {
        sorted.sort_by(|left, right| compare(right, left));
    } else {
        sorted.sort_by(compare);
    }

    Ok(SortOutcome { sorted, skipped })
}

/// Parses both sides and orders them by precedence.
pub fn run_compare_workflow(
    left: &str,
    right: &str,
) -> Result<(Version, Version, Ordering), ParseError> {
    let left = Version::parse(left)?;
    let right = Version::parse(right)?;
    let ordering = compare(&left, &right);
    Ok((left, right, ordering))
}

/// Per-input outcome of validation, in input order
pub fn run_validate_workflow(inputs: &[String]) -> Vec<Result<Version, ParseError>> {
    inputs.iter().map(|input| Version::parse(input)).collect()
}
