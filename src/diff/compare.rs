//! Divergence between two inspected plans.

use super::result::{
    AttributeDiff, CollectionKind, ComparisonCollection, ComparisonDiff, ComparisonEntry,
    ComparisonResult, DiffCollection, EntityDiff, InspectionResult,
};

/// Compare two inspection results collection by collection.
///
/// An attribute path that only one plan reports is recorded on that side and
/// mirrored as `(empty)/(empty)` on the other. Paths reported by both plans
/// with different values keep both values. Identical entries never appear.
pub fn compare_inspections(a: &InspectionResult, b: &InspectionResult) -> ComparisonResult {
    let (resources, (resource_drifts, outputs)) = rayon::join(
        || diverge(a, b, CollectionKind::Resources),
        || {
            rayon::join(
                || diverge(a, b, CollectionKind::ResourceDrifts),
                || diverge(a, b, CollectionKind::Outputs),
            )
        },
    );

    ComparisonResult::new(ComparisonDiff {
        resources,
        outputs,
        resource_drifts,
    })
}

fn diverge(a: &InspectionResult, b: &InspectionResult, kind: CollectionKind) -> ComparisonCollection {
    diverge_collections(a.diff.collection(kind), b.diff.collection(kind))
}

fn diverge_collections(a: &DiffCollection, b: &DiffCollection) -> ComparisonCollection {
    let missing = EntityDiff::new();
    let mut out = ComparisonCollection::new();

    for (address, a_diff) in a {
        let entry = entity_divergence(a_diff, b.get(address).unwrap_or(&missing));
        if !entry.is_empty() {
            out.insert(address.clone(), entry);
        }
    }

    for (address, b_diff) in b {
        if a.contains_key(address) {
            continue;
        }
        let entry = entity_divergence(&missing, b_diff);
        if !entry.is_empty() {
            out.insert(address.clone(), entry);
        }
    }

    out
}

/// Divergence of a single entity between plan A and plan B.
#[must_use]
pub fn entity_divergence(a: &EntityDiff, b: &EntityDiff) -> ComparisonEntry {
    let mut entry = ComparisonEntry::default();

    for (path, a_attr) in a {
        match b.get(path) {
            None => {
                entry.plan_a.insert(path.clone(), a_attr.clone());
                entry.plan_b.insert(path.clone(), AttributeDiff::empty());
            }
            Some(b_attr) if b_attr != a_attr => {
                entry.plan_a.insert(path.clone(), a_attr.clone());
                entry.plan_b.insert(path.clone(), b_attr.clone());
            }
            Some(_) => {}
        }
    }

    for (path, b_attr) in b {
        if !a.contains_key(path) {
            entry.plan_a.insert(path.clone(), AttributeDiff::empty());
            entry.plan_b.insert(path.clone(), b_attr.clone());
        }
    }

    entry
}
