//! Filter rule definitions.
//!
//! A filter document lists, per collection, the rules that suppress attribute
//! diffs the caller does not care about:
//!
//! ```json
//! {
//!   "resourceChanges": [
//!     {
//!       "namePattern": "aws_instance.*",
//!       "diffPatterns": { ".ami": [{ "before": "ami-0397850", "after": "ami-*" }] }
//!     }
//!   ]
//! }
//! ```

use crate::diff::CollectionKind;
use crate::error::{InputErrorKind, PlanError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Before/after globs that must both match for an attribute to be suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiffPattern {
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
}

impl DiffPattern {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// A suppression rule scoped to entities whose name matches `name_pattern`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    /// Glob matched against the entity address (or output name)
    #[serde(default)]
    pub name_pattern: String,

    /// Attribute path glob -> value pairs, any of which suppresses the path
    #[serde(default)]
    pub diff_patterns: IndexMap<String, Vec<DiffPattern>>,
}

impl FilterRule {
    /// Create a rule with no diff patterns
    pub fn new(name_pattern: impl Into<String>) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            diff_patterns: IndexMap::new(),
        }
    }

    /// Add a value pair for an attribute path glob
    #[must_use]
    pub fn with_pattern(mut self, path: impl Into<String>, pattern: DiffPattern) -> Self {
        self.diff_patterns.entry(path.into()).or_default().push(pattern);
        self
    }
}

/// Per-collection filter rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectFilter {
    #[serde(default)]
    pub output_changes: Vec<FilterRule>,
    #[serde(default)]
    pub resource_changes: Vec<FilterRule>,
    #[serde(default)]
    pub drift_changes: Vec<FilterRule>,
}

impl InspectFilter {
    /// Parse a filter document.
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(PlanError::input(
                "unable to parse filter",
                InputErrorKind::EmptyInput,
            ));
        }
        serde_json::from_str(content).map_err(|e| {
            PlanError::input(
                "unable to parse filter",
                InputErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    /// Rules that apply to the given collection
    #[must_use]
    pub fn rules_for(&self, kind: CollectionKind) -> &[FilterRule] {
        match kind {
            CollectionKind::Resources => &self.resource_changes,
            CollectionKind::ResourceDrifts => &self.drift_changes,
            CollectionKind::Outputs => &self.output_changes,
        }
    }

    /// True when no collection has any rule
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output_changes.is_empty()
            && self.resource_changes.is_empty()
            && self.drift_changes.is_empty()
    }

    /// Total number of rules across collections
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.output_changes.len() + self.resource_changes.len() + self.drift_changes.len()
    }
}
