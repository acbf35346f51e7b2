//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: pretty if stdout is a TTY, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Terraform-style human readable lines
    Pretty,
    /// Counts only
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration shared by every reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Replace the default header line
    pub title: Option<String>,
    /// Append the `Changes: ...` counts line
    pub show_counts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            show_counts: true,
        }
    }
}

impl ReportConfig {
    /// Set a custom header line
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
