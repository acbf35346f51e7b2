//! Pipeline orchestration for plan operations.
//!
//! This module provides shared orchestration logic for load → inspect → report
//! workflows, reducing duplication across CLI command handlers.

mod inspect_stage;
mod output;
mod parse;
mod report_stage;

pub use inspect_stage::{run_comparison, run_inspection};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{load_filter, load_plan, PlanSource};
pub use report_stage::{output_comparison_report, output_inspection_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a plan or filter document
    #[error("Failed to load {what}: {source}")]
    LoadFailed {
        what: String,
        source: anyhow::Error,
    },

    /// Inspection or comparison failed
    #[error("Inspection failed: {source}")]
    InspectFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no un-filtered changes (or no --detailed-exitcode)
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
    /// Un-filtered changes or divergences remain with --detailed-exitcode
    pub const CHANGES_DETECTED: i32 = 2;
}
