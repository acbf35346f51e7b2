//! Terraform JSON plan model.
//!
//! Only the parts of `terraform show -json` output that the inspector reads
//! are modelled; every other field is ignored during deserialization.

use super::value::{deserialize_overlay, PlanValue};
use crate::error::{InputErrorKind, PlanError, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// A parsed Terraform plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plan {
    /// Plan JSON format version (e.g. "1.2")
    #[serde(default)]
    pub format_version: Option<String>,
    /// Terraform version that produced the plan
    #[serde(default)]
    pub terraform_version: Option<String>,
    /// Planned changes to managed resources and data sources
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
    /// Changes detected outside of Terraform since the last apply
    #[serde(default)]
    pub resource_drift: Vec<ResourceChange>,
    /// Planned changes to root module outputs, keyed by output name
    #[serde(default)]
    pub output_changes: IndexMap<String, Change>,
}

/// A change to a single resource instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceChange {
    /// Full resource address (e.g. `module.vpc.aws_subnet.private[0]`)
    pub address: String,
    #[serde(default)]
    pub change: Change,
}

/// The before/after states of one entity together with its overlays.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub before: PlanValue,
    #[serde(default)]
    pub after: PlanValue,
    /// Leaves whose after value is only known once the plan is applied
    #[serde(default, deserialize_with = "deserialize_overlay")]
    pub after_unknown: Option<PlanValue>,
    /// Leaves whose before value must be redacted
    #[serde(default, deserialize_with = "deserialize_overlay")]
    pub before_sensitive: Option<PlanValue>,
    /// Leaves whose after value must be redacted
    #[serde(default, deserialize_with = "deserialize_overlay")]
    pub after_sensitive: Option<PlanValue>,
}

impl Change {
    /// Create a change with no overlays
    #[must_use]
    pub fn new(before: impl Into<PlanValue>, after: impl Into<PlanValue>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            ..Self::default()
        }
    }

    /// Set the after-unknown overlay
    #[must_use]
    pub fn with_after_unknown(mut self, overlay: impl Into<PlanValue>) -> Self {
        self.after_unknown = Some(overlay.into());
        self
    }

    /// Set the before-sensitive overlay
    #[must_use]
    pub fn with_before_sensitive(mut self, overlay: impl Into<PlanValue>) -> Self {
        self.before_sensitive = Some(overlay.into());
        self
    }

    /// Set the after-sensitive overlay
    #[must_use]
    pub fn with_after_sensitive(mut self, overlay: impl Into<PlanValue>) -> Self {
        self.after_sensitive = Some(overlay.into());
        self
    }
}

impl ResourceChange {
    #[must_use]
    pub fn new(address: impl Into<String>, change: Change) -> Self {
        Self {
            address: address.into(),
            change,
        }
    }
}

impl Plan {
    /// Total number of entities the inspector will look at
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.resource_changes.len() + self.resource_drift.len() + self.output_changes.len()
    }
}

/// Parse a JSON plan from a string.
pub fn parse_plan_str(content: &str) -> Result<Plan> {
    if content.trim().is_empty() {
        return Err(PlanError::input(
            "unable to parse terraform plan",
            InputErrorKind::EmptyInput,
        ));
    }

    serde_json::from_str(content).map_err(|e| {
        PlanError::input(
            "unable to parse terraform plan",
            InputErrorKind::InvalidJson(e.to_string()),
        )
    })
}
