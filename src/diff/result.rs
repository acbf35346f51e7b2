//! Inspection and comparison result structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder for a value that is absent on one side of a diff.
pub const EMPTY: &str = "(empty)";
/// Placeholder for an after value that is only known once the plan is applied.
pub const KNOWN_AFTER_APPLY: &str = "(known after apply)";
/// Placeholder for a redacted value.
pub const SENSITIVE_VALUE: &str = "(sensitive value)";

/// Before/after values of a single attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeDiff {
    pub before: String,
    pub after: String,
}

impl AttributeDiff {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }

    /// The `(empty)/(empty)` entry used to mirror a path that only one plan has
    #[must_use]
    pub fn empty() -> Self {
        Self::new(EMPTY, EMPTY)
    }
}

/// Attribute path -> diff for one entity.
pub type EntityDiff = BTreeMap<String, AttributeDiff>;

/// Entity address (or output name) -> diff.
pub type DiffCollection = BTreeMap<String, EntityDiff>;

/// The three collections a plan is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Resources,
    ResourceDrifts,
    Outputs,
}

impl CollectionKind {
    /// All kinds in presentation order
    pub const ALL: [Self; 3] = [Self::Resources, Self::ResourceDrifts, Self::Outputs];

    /// Keyword used when presenting an entity of this kind
    #[must_use]
    pub const fn entity_keyword(self) -> &'static str {
        match self {
            Self::Resources | Self::ResourceDrifts => "resource",
            Self::Outputs => "output",
        }
    }

    /// Word describing what the entity lines show
    #[must_use]
    pub const fn change_label(self) -> &'static str {
        match self {
            Self::Resources | Self::Outputs => "changes",
            Self::ResourceDrifts => "drift",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resources => write!(f, "resource changes"),
            Self::ResourceDrifts => write!(f, "resource drift"),
            Self::Outputs => write!(f, "output changes"),
        }
    }
}

/// Entity counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffCounts {
    pub resources: usize,
    pub resource_drifts: usize,
    pub outputs: usize,
}

impl DiffCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.resources + self.resource_drifts + self.outputs
    }
}

impl fmt::Display for DiffCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changes: {} resources, {} resource drifts, {} outputs",
            self.resources, self.resource_drifts, self.outputs
        )
    }
}

/// The three diff collections of one inspected plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDiff {
    #[serde(default)]
    pub resources: DiffCollection,
    #[serde(default)]
    pub outputs: DiffCollection,
    #[serde(default)]
    pub resource_drifts: DiffCollection,
}

impl InspectionDiff {
    /// Borrow the collection of the given kind
    #[must_use]
    pub fn collection(&self, kind: CollectionKind) -> &DiffCollection {
        match kind {
            CollectionKind::Resources => &self.resources,
            CollectionKind::ResourceDrifts => &self.resource_drifts,
            CollectionKind::Outputs => &self.outputs,
        }
    }

    /// Mutably borrow the collection of the given kind
    pub fn collection_mut(&mut self, kind: CollectionKind) -> &mut DiffCollection {
        match kind {
            CollectionKind::Resources => &mut self.resources,
            CollectionKind::ResourceDrifts => &mut self.resource_drifts,
            CollectionKind::Outputs => &mut self.outputs,
        }
    }
}

/// Result of inspecting a single plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct InspectionResult {
    pub diff: InspectionDiff,
}

impl InspectionResult {
    pub fn new(diff: InspectionDiff) -> Self {
        Self { diff }
    }

    /// True when no resource change, drift or output change survived filtering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diff.resources.is_empty()
            && self.diff.resource_drifts.is_empty()
            && self.diff.outputs.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> DiffCounts {
        DiffCounts {
            resources: self.diff.resources.len(),
            resource_drifts: self.diff.resource_drifts.len(),
            outputs: self.diff.outputs.len(),
        }
    }
}

/// How one entity differs between two plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    #[serde(rename = "planA", default)]
    pub plan_a: EntityDiff,
    #[serde(rename = "planB", default)]
    pub plan_b: EntityDiff,
}

impl ComparisonEntry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plan_a.is_empty() && self.plan_b.is_empty()
    }

    /// Swap the two sides
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            plan_a: self.plan_b,
            plan_b: self.plan_a,
        }
    }
}

/// Entity address (or output name) -> divergence.
pub type ComparisonCollection = BTreeMap<String, ComparisonEntry>;

/// The three divergence collections of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDiff {
    #[serde(default)]
    pub resources: ComparisonCollection,
    #[serde(default)]
    pub outputs: ComparisonCollection,
    #[serde(default)]
    pub resource_drifts: ComparisonCollection,
}

impl ComparisonDiff {
    #[must_use]
    pub fn collection(&self, kind: CollectionKind) -> &ComparisonCollection {
        match kind {
            CollectionKind::Resources => &self.resources,
            CollectionKind::ResourceDrifts => &self.resource_drifts,
            CollectionKind::Outputs => &self.outputs,
        }
    }
}

/// Result of comparing two inspected plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonResult {
    pub diff: ComparisonDiff,
}

impl ComparisonResult {
    pub fn new(diff: ComparisonDiff) -> Self {
        Self { diff }
    }

    /// True when the two plans do not diverge in any collection
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diff.resources.is_empty()
            && self.diff.resource_drifts.is_empty()
            && self.diff.outputs.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> DiffCounts {
        DiffCounts {
            resources: self.diff.resources.len(),
            resource_drifts: self.diff.resource_drifts.len(),
            outputs: self.diff.outputs.len(),
        }
    }

    /// The same comparison seen from the other plan
    pub fn swapped(self) -> Self {
        let swap = |collection: ComparisonCollection| -> ComparisonCollection {
            collection
                .into_iter()
                .map(|(address, entry)| (address, entry.swapped()))
                .collect()
        };
        Self {
            diff: ComparisonDiff {
                resources: swap(self.diff.resources),
                outputs: swap(self.diff.outputs),
                resource_drifts: swap(self.diff.resource_drifts),
            },
        }
    }
}
