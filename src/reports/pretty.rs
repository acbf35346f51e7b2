//! Terraform-style line output.
//!
//! ```text
//!     Terraform plan contained the following un-filtered changes:
//!
//!         resource "aws_instance.this" changes:
//!             .instance_type: t2.medium -> t2.micro
//!
//!     Changes: 1 resources, 0 resource drifts, 0 outputs
//! ```

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{CollectionKind, ComparisonResult, DiffCounts, EntityDiff, InspectionResult};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const INSPECTION_HEADER: &str = "Terraform plan contained the following un-filtered changes:";
const COMPARISON_HEADER: &str = "Terraform plans differ at the following un-filtered changes:";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ORANGE: &str = "\x1b[33m";

/// Pretty line reporter
pub struct PrettyReporter {
    /// Use colored output
    colored: bool,
}

impl PrettyReporter {
    /// Create a new pretty reporter
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

    fn paint(&self, text: &str, code: &str) -> String {
        if self.colored {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_header(&self, out: &mut String, default: &str, config: &ReportConfig) -> std::fmt::Result {
        writeln!(out, "\t{}", config.title.as_deref().unwrap_or(default))
    }

    fn write_entity_header(&self, out: &mut String, kind: CollectionKind, address: &str) -> std::fmt::Result {
        writeln!(
            out,
            "\n\t\t{} {} {}:",
            kind.entity_keyword(),
            self.paint(&format!("\"{address}\""), BOLD),
            kind.change_label()
        )
    }

    fn write_attributes(&self, out: &mut String, diff: &EntityDiff, indent: &str) -> std::fmt::Result {
        let width = diff.keys().map(|path| path.width()).max().unwrap_or(0);
        let arrow = self.paint("->", ORANGE);

        for (path, attribute) in diff {
            let padding = " ".repeat(width - path.width() + 1);
            writeln!(
                out,
                "{indent}{path}:{padding}{} {arrow} {}",
                attribute.before, attribute.after
            )?;
        }
        Ok(())
    }

    fn write_counts(&self, out: &mut String, counts: DiffCounts, config: &ReportConfig) -> std::fmt::Result {
        if config.show_counts {
            writeln!(out, "\n\t{counts}")?;
        }
        Ok(())
    }
}

impl Default for PrettyReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PrettyReporter {
    fn generate_inspection_report(
        &self,
        result: &InspectionResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        self.write_header(&mut out, INSPECTION_HEADER, config)?;

        for kind in CollectionKind::ALL {
            for (address, diff) in result.diff.collection(kind) {
                self.write_entity_header(&mut out, kind, address)?;
                self.write_attributes(&mut out, diff, "\t\t\t")?;
            }
        }

        self.write_counts(&mut out, result.counts(), config)?;
        Ok(out)
    }

    fn generate_comparison_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        self.write_header(&mut out, COMPARISON_HEADER, config)?;

        for kind in CollectionKind::ALL {
            for (address, entry) in result.diff.collection(kind) {
                self.write_entity_header(&mut out, kind, address)?;
                writeln!(out, "\n\t\t\t{}", self.paint("Plan A:", BOLD))?;
                self.write_attributes(&mut out, &entry.plan_a, "\t\t\t\t")?;
                writeln!(out, "\n\t\t\t{}", self.paint("Plan B:", BOLD))?;
                self.write_attributes(&mut out, &entry.plan_b, "\t\t\t\t")?;
            }
        }

        self.write_counts(&mut out, result.counts(), config)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Pretty
    }
}
