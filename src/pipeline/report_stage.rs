//! Report output stage.

use super::{auto_detect_format, should_use_color, write_output, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::diff::{ComparisonResult, InspectionResult};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportGenerator};
use anyhow::Result;

fn reporter_for(output: &OutputConfig, target: &OutputTarget) -> Box<dyn ReportGenerator> {
    let format = auto_detect_format(output.format, target);
    let use_color = should_use_color(output.no_color, target);
    create_reporter_with_options(format, use_color)
}

/// Output an inspection report to the configured destination.
pub fn output_inspection_report(output: &OutputConfig, result: &InspectionResult, quiet: bool) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let report = reporter_for(output, &target)
        .generate_inspection_report(result, &ReportConfig::default())
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &target, quiet)
}

/// Output a comparison report to the configured destination.
pub fn output_comparison_report(output: &OutputConfig, result: &ComparisonResult, quiet: bool) -> Result<()> {
    let target = OutputTarget::from_option(output.file.clone());
    let report = reporter_for(output, &target)
        .generate_comparison_report(result, &ReportConfig::default())
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&report, &target, quiet)
}
