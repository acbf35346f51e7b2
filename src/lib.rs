//! **Inspect, filter and compare Terraform JSON plans.**
//!
//! `tfplan-tools` reads the JSON rendering of a Terraform plan
//! (`terraform show -json`) and reduces it to the attribute-level changes that
//! remain after a user-supplied filter has removed the expected noise. Two plans
//! inspected under the same filter can be compared to find where their
//! un-filtered changes diverge.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the input side. [`Plan`] holds resource changes, resource
//!   drift and output changes; values are [`PlanValue`] trees.
//! - **[`diff`]**: the [`InspectEngine`] flattens each change into dotted paths,
//!   marks unknown and sensitive values, keeps the differing attributes and
//!   compares two inspections.
//! - **[`matching`]**: wildcard patterns and the [`InspectFilter`] rules that
//!   suppress expected changes.
//! - **[`reports`]**: JSON, pretty and summary renderings of a result.
//! - **[`pipeline`]** and **[`cli`]**: load → inspect → report orchestration used
//!   by the `tfplan-tools` binary.
//!
//! ## Inspecting a plan
//!
//! ```no_run
//! use tfplan_tools::{parse_plan_str, InspectEngine, InspectFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let plan = parse_plan_str(&std::fs::read_to_string("plan.json")?)?;
//!     let filter = InspectFilter::from_json(&std::fs::read_to_string("filter.json")?)?;
//!
//!     let result = InspectEngine::new().with_filter(filter).inspect(&plan)?;
//!     for (address, attributes) in &result.diff.resources {
//!         println!("{address}: {} changed attributes", attributes.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Comparing two plans
//!
//! ```no_run
//! use tfplan_tools::{parse_plan_str, InspectEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let staging = parse_plan_str(&std::fs::read_to_string("staging.json")?)?;
//!     let production = parse_plan_str(&std::fs::read_to_string("production.json")?)?;
//!
//!     let comparison = InspectEngine::new().compare(Some(&staging), Some(&production))?;
//!     if !comparison.is_empty() {
//!         println!("{}", comparison.counts());
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, FilterConfig, OutputConfig};
pub use config::{CompareConfig, ConfigError, InspectConfig, Validatable};
pub use diff::{
    AttributeDiff, CollectionKind, ComparisonEntry, ComparisonResult, DiffCounts, EntityDiff,
    InspectEngine, InspectionResult,
};
pub use error::{ErrorContext, OptionContext, PlanError, Result};
pub use matching::{DiffPattern, FilterEngine, FilterRule, InspectFilter, PatternMatcher};
pub use model::{parse_plan_str, Change, Plan, PlanValue, ResourceChange};
pub use reports::{ReportFormat, ReportGenerator};
