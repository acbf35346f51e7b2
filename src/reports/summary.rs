//! Summary report generator for shell output.
//!
//! Prints only the per-collection counts.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonResult, DiffCounts, InspectionResult};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn render(&self, counts: DiffCounts) -> String {
        let color = if counts.total() == 0 { "green" } else { "yellow" };
        format!("{}\n", ansi_color(&counts.to_string(), color, self.colored))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_inspection_report(
        &self,
        result: &InspectionResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Ok(self.render(result.counts()))
    }

    fn generate_comparison_report(
        &self,
        result: &ComparisonResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        Ok(self.render(result.counts()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EntityDiff;

    #[test]
    fn test_summary_counts_line() {
        let mut result = InspectionResult::default();
        result
            .diff
            .resources
            .insert("aws_instance.web".to_string(), EntityDiff::new());

        let report = SummaryReporter::new()
            .no_color()
            .generate_inspection_report(&result, &ReportConfig::default())
            .unwrap();
        assert_eq!(report, "Changes: 1 resources, 0 resource drifts, 0 outputs\n");
    }

    #[test]
    fn test_summary_color_reflects_emptiness() {
        let report = SummaryReporter::new()
            .generate_comparison_report(&ComparisonResult::default(), &ReportConfig::default())
            .unwrap();
        assert!(report.starts_with("\x1b[32m"));
    }
}
