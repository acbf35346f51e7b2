//! Inspect command handler.
//!
//! Implements the `inspect` subcommand: normalize and filter a single plan.

use crate::config::InspectConfig;
use crate::diff::InspectionResult;
use crate::pipeline::{exit_codes, output_inspection_report, run_inspection};
use anyhow::Result;
use std::path::Path;

/// Run the inspect command, returning the desired exit code.
///
/// `filter_file` is used only when the command line passes no filter.
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_inspect(config: InspectConfig, filter_file: Option<&Path>) -> Result<i32> {
    super::ensure_valid(&config)?;

    let result = run_inspection(&config, filter_file)?;
    output_inspection_report(&config.output, &result, config.behavior.quiet)?;

    Ok(determine_exit_code(&config, &result))
}

fn determine_exit_code(config: &InspectConfig, result: &InspectionResult) -> i32 {
    if config.behavior.detailed_exitcode && !result.is_empty() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
