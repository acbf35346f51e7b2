//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ComparisonResult, InspectionResult};
use serde::Serialize;

/// JSON report generator
///
/// Emits the result documents unchanged: `{"diff": {...}}`.
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter producing compact single-line output
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_inspection_report(
        &self,
        result: &InspectionResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.serialize(result)
    }

    fn generate_comparison_report(
        &self,
        result: &ComparisonResult,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.serialize(result)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
