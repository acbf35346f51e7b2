//! Report generation for inspection and comparison results.
//!
//! This module provides the output formats of the command line tool:
//! - JSON: the result document, for programmatic integration
//! - Pretty: Terraform-style lines for people reading CI logs
//! - Summary: the counts line only

mod json;
mod pretty;
mod summary;
mod types;

pub use json::JsonReporter;
pub use pretty::PrettyReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::diff::{ComparisonResult, InspectionResult};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a single inspected plan
    fn generate_inspection_report(
        &self,
        result: &InspectionResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for the divergence between two plans
    fn generate_comparison_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write an inspection report to a writer
    fn write_inspection_report(
        &self,
        result: &InspectionResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_inspection_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Write a comparison report to a writer
    fn write_comparison_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_comparison_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control.
///
/// `Auto` must be resolved by the caller; it falls back to JSON here.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Pretty => {
            if use_color {
                Box::new(PrettyReporter::new())
            } else {
                Box::new(PrettyReporter::new().no_color())
            }
        }
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [ReportFormat::Json, ReportFormat::Pretty, ReportFormat::Summary] {
            assert_eq!(create_reporter(format).format(), format);
        }
        assert_eq!(create_reporter(ReportFormat::Auto).format(), ReportFormat::Json);
    }

    #[test]
    fn test_write_report_to_writer() {
        let reporter = create_reporter_with_options(ReportFormat::Summary, false);
        let mut buffer = Vec::new();
        reporter
            .write_inspection_report(&InspectionResult::default(), &ReportConfig::default(), &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Changes: 0 resources, 0 resource drifts, 0 outputs\n"
        );
    }
}
