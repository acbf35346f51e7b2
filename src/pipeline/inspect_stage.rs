//! Inspection and comparison stage.
//!
//! Loads the plans and the filter, builds the engine and runs it.

use super::parse::{load_filter, load_plan, PlanSource};
use super::PipelineError;
use crate::config::{CompareConfig, InspectConfig};
use crate::diff::{ComparisonResult, InspectEngine, InspectionResult};
use anyhow::{bail, Result};
use std::path::Path;

/// Inspect a single plan.
pub fn run_inspection(config: &InspectConfig, filter_file: Option<&Path>) -> Result<InspectionResult> {
    let quiet = config.behavior.quiet;
    let plan = load_plan(&config.plan, quiet)?;
    let filter = load_filter(config.filter.as_deref(), filter_file)?;

    if !quiet {
        tracing::info!(
            "Inspecting {} entities with {} filter rules",
            plan.entity_count(),
            filter.rule_count()
        );
    }

    let result = InspectEngine::new()
        .with_filter(filter)
        .inspect(&plan)
        .map_err(|e| PipelineError::InspectFailed { source: e.into() })?;

    if !quiet {
        tracing::info!("{}", result.counts());
    }
    Ok(result)
}

/// Inspect two plans with the same filter and compare them.
pub fn run_comparison(config: &CompareConfig, filter_file: Option<&Path>) -> Result<ComparisonResult> {
    let quiet = config.behavior.quiet;

    let stdin_reads = [&config.plan_a, &config.plan_b]
        .iter()
        .filter(|arg| PlanSource::from_arg(arg) == PlanSource::Stdin)
        .count();
    if stdin_reads > 1 {
        bail!("only one of plan-a and plan-b can be read from standard input");
    }

    let plan_a = load_plan(&config.plan_a, quiet)?;
    let plan_b = load_plan(&config.plan_b, quiet)?;
    let filter = load_filter(config.filter.as_deref(), filter_file)?;

    if !quiet {
        tracing::info!(
            "Comparing plans ({} and {} entities) with {} filter rules",
            plan_a.entity_count(),
            plan_b.entity_count(),
            filter.rule_count()
        );
    }

    let result = InspectEngine::new()
        .with_filter(filter)
        .compare(Some(&plan_a), Some(&plan_b))
        .map_err(|e| PipelineError::InspectFailed { source: e.into() })?;

    if !quiet {
        tracing::info!("{}", result.counts());
    }
    Ok(result)
}
