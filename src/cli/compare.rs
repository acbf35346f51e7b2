//! Compare command handler.
//!
//! Implements the `compare` subcommand: inspect two plans with one filter and
//! report where the un-filtered changes diverge.

use crate::config::CompareConfig;
use crate::diff::ComparisonResult;
use crate::pipeline::{exit_codes, output_comparison_report, run_comparison};
use anyhow::Result;
use std::path::Path;

/// Run the compare command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig, filter_file: Option<&Path>) -> Result<i32> {
    super::ensure_valid(&config)?;

    let result = run_comparison(&config, filter_file)?;
    output_comparison_report(&config.output, &result, config.behavior.quiet)?;

    Ok(determine_exit_code(&config, &result))
}

fn determine_exit_code(config: &CompareConfig, result: &ComparisonResult) -> i32 {
    if config.behavior.detailed_exitcode && !result.is_empty() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
