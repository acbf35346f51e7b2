//! Plan inspection engine.

use rayon::prelude::*;
use tracing::debug;

use super::compare::compare_inspections;
use super::normalize::normalize;
use super::result::{CollectionKind, ComparisonResult, DiffCollection, InspectionDiff, InspectionResult};
use crate::error::{OptionContext, Result};
use crate::matching::{FilterEngine, InspectFilter};
use crate::model::{Change, Plan};

/// Turns plans into filtered attribute-level diffs.
#[derive(Debug, Clone, Default)]
pub struct InspectEngine {
    filter: InspectFilter,
}

impl InspectEngine {
    /// Create an engine that suppresses nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter applied after normalization
    #[must_use]
    pub fn with_filter(mut self, filter: InspectFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The configured filter
    #[must_use]
    pub fn filter(&self) -> &InspectFilter {
        &self.filter
    }

    /// Normalize and filter every entity of a plan.
    pub fn inspect(&self, plan: &Plan) -> Result<InspectionResult> {
        let (resources, (resource_drifts, outputs)) = rayon::join(
            || {
                normalize_collection(
                    plan.resource_changes
                        .iter()
                        .map(|rc| (rc.address.as_str(), &rc.change))
                        .collect(),
                )
            },
            || {
                rayon::join(
                    || {
                        normalize_collection(
                            plan.resource_drift
                                .iter()
                                .map(|rc| (rc.address.as_str(), &rc.change))
                                .collect(),
                        )
                    },
                    || {
                        normalize_collection(
                            plan.output_changes
                                .iter()
                                .map(|(name, change)| (name.as_str(), change))
                                .collect(),
                        )
                    },
                )
            },
        );

        let mut diff = InspectionDiff {
            resources,
            outputs,
            resource_drifts,
        };

        for kind in CollectionKind::ALL {
            debug!(
                collection = %kind,
                entities = diff.collection(kind).len(),
                "Normalized plan entities"
            );
        }

        let stats = FilterEngine::new(&self.filter).apply(&mut diff)?;
        debug!(
            suppressed = stats.suppressed_attributes,
            pruned = stats.pruned_entities,
            "Filtered plan diff"
        );

        Ok(InspectionResult::new(diff))
    }

    /// Inspect two plans with the same filter and compare the results.
    pub fn compare(&self, plan_a: Option<&Plan>, plan_b: Option<&Plan>) -> Result<ComparisonResult> {
        let plan_a = plan_a.context_none("plan-a cannot be empty")?;
        let plan_b = plan_b.context_none("plan-b cannot be empty")?;

        let (inspection_a, inspection_b) =
            rayon::join(|| self.inspect(plan_a), || self.inspect(plan_b));

        Ok(compare_inspections(&inspection_a?, &inspection_b?))
    }
}

/// Normalize entities in parallel and merge them in source order.
///
/// A repeated address keeps its last occurrence; entities without attribute
/// changes are left out.
fn normalize_collection(entities: Vec<(&str, &Change)>) -> DiffCollection {
    let diffs: Vec<_> = entities
        .par_iter()
        .map(|(address, change)| (*address, normalize(change)))
        .collect();

    let mut collection = DiffCollection::new();
    for (address, diff) in diffs {
        if diff.is_empty() {
            collection.remove(address);
        } else {
            collection.insert(address.to_string(), diff);
        }
    }
    collection
}
