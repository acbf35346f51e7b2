//! Plan and filter loading.
//!
//! Command line values for plans and filters may be inline JSON, `-` for
//! standard input, or a path to a file.

use super::PipelineError;
use crate::matching::InspectFilter;
use crate::model::{parse_plan_str, Plan};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a JSON document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    /// The argument itself holds the JSON document
    Inline(String),
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl PlanSource {
    /// Interpret a command line argument.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        let trimmed = arg.trim_start();
        if trimmed.starts_with('{') {
            Self::Inline(arg.to_string())
        } else if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Short description for log and error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Inline(_) => "inline JSON".to_string(),
            Self::Stdin => "standard input".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole document.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(content) => Ok(content.clone()),
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read standard input")?;
                Ok(content)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .map_err(|e| crate::error::PlanError::io(path, e))
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Load and parse a plan argument.
pub fn load_plan(arg: &str, quiet: bool) -> Result<Plan> {
    let source = PlanSource::from_arg(arg);
    if !quiet {
        tracing::info!("Loading plan from {}", source.describe());
    }

    let plan = source
        .read()
        .and_then(|content| parse_plan_str(&content).map_err(anyhow::Error::from))
        .map_err(|source_err| PipelineError::LoadFailed {
            what: format!("plan {}", source.describe()),
            source: source_err,
        })?;

    tracing::debug!(
        format_version = plan.format_version.as_deref().unwrap_or("unknown"),
        terraform_version = plan.terraform_version.as_deref().unwrap_or("unknown"),
        resource_changes = plan.resource_changes.len(),
        resource_drift = plan.resource_drift.len(),
        output_changes = plan.output_changes.len(),
        "Parsed plan"
    );

    Ok(plan)
}

/// Load the filter from the command line argument, falling back to a
/// configured file. No filter at all means nothing is suppressed, and so does
/// a blank argument, even when a file is configured.
pub fn load_filter(arg: Option<&str>, fallback_file: Option<&Path>) -> Result<InspectFilter> {
    let source = match (arg, fallback_file) {
        (Some(arg), _) if arg.trim().is_empty() => return Ok(InspectFilter::default()),
        (Some(arg), _) => PlanSource::from_arg(arg),
        (None, Some(path)) => PlanSource::File(path.to_path_buf()),
        (None, None) => return Ok(InspectFilter::default()),
    };

    if let PlanSource::Inline(content) = &source {
        if content.trim() == "{}" {
            return Ok(InspectFilter::default());
        }
    }

    let filter = source
        .read()
        .and_then(|content| InspectFilter::from_json(&content).map_err(anyhow::Error::from))
        .map_err(|source_err| PipelineError::LoadFailed {
            what: format!("filter {}", source.describe()),
            source: source_err,
        })?;

    tracing::debug!(rules = filter.rule_count(), "Loaded filter");
    Ok(filter)
}
