//! Configuration types for tfplan-tools operations.
//!
//! Provides structured configuration for the inspect and compare commands.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Default filter settings
    pub filter: FilterConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Exit with code 2 when unfiltered changes remain.
    pub const fn detailed_exitcode(mut self, detailed: bool) -> Self {
        self.config.behavior.detailed_exitcode = detailed;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Set the default filter file.
    pub fn filter_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.filter.filter_file = file;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 2 if unfiltered changes or divergences remain
    pub detailed_exitcode: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Filter defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter document used when the command line does not pass one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_file: Option<PathBuf>,
}

// ============================================================================
// Per-command configuration
// ============================================================================

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Plan argument: inline JSON, `-` for stdin, or a file path
    pub plan: String,
    /// Filter argument in the same forms as `plan`
    pub filter: Option<String>,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Configuration for the compare command
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub plan_a: String,
    pub plan_b: String,
    pub filter: Option<String>,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Builder for [`InspectConfig`]
#[derive(Debug, Default)]
pub struct InspectConfigBuilder {
    plan: Option<String>,
    filter: Option<String>,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl InspectConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub const fn detailed_exitcode(mut self, detailed: bool) -> Self {
        self.behavior.detailed_exitcode = detailed;
        self
    }

    pub fn build(self) -> anyhow::Result<InspectConfig> {
        let plan = self
            .plan
            .filter(|p| !p.is_empty())
            .ok_or_else(|| anyhow::anyhow!("plan cannot be empty"))?;

        Ok(InspectConfig {
            plan,
            filter: self.filter,
            output: self.output,
            behavior: self.behavior,
        })
    }
}

/// Builder for [`CompareConfig`]
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    plan_a: Option<String>,
    plan_b: Option<String>,
    filter: Option<String>,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl CompareConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plan_a(mut self, plan: impl Into<String>) -> Self {
        self.plan_a = Some(plan.into());
        self
    }

    #[must_use]
    pub fn plan_b(mut self, plan: impl Into<String>) -> Self {
        self.plan_b = Some(plan.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub const fn detailed_exitcode(mut self, detailed: bool) -> Self {
        self.behavior.detailed_exitcode = detailed;
        self
    }

    pub fn build(self) -> anyhow::Result<CompareConfig> {
        let plan_a = self
            .plan_a
            .filter(|p| !p.is_empty())
            .ok_or_else(|| anyhow::anyhow!("plan-a cannot be empty"))?;
        let plan_b = self
            .plan_b
            .filter(|p| !p.is_empty())
            .ok_or_else(|| anyhow::anyhow!("plan-b cannot be empty"))?;

        Ok(CompareConfig {
            plan_a,
            plan_b,
            filter: self.filter,
            output: self.output,
            behavior: self.behavior,
        })
    }
}
