//! Attribute-level diff of a single plan change.

use super::flatten::{flatten_value, FlatMap};
use super::result::{AttributeDiff, EntityDiff, EMPTY, KNOWN_AFTER_APPLY, SENSITIVE_VALUE};
use crate::model::{Change, PlanValue};

/// Compute the attribute diff of one entity.
///
/// Before, after and the three overlays are flattened concurrently. Unknown
/// markers are applied to the after side first, then sensitive markers, so a
/// path that is both unknown and sensitive renders as redacted.
#[must_use]
pub fn normalize(change: &Change) -> EntityDiff {
    let ((mut before, mut after), (unknown, (before_sensitive, after_sensitive))) = rayon::join(
        || {
            rayon::join(
                || flatten_value(&change.before),
                || flatten_value(&change.after),
            )
        },
        || {
            rayon::join(
                || flatten_overlay(change.after_unknown.as_ref()),
                || {
                    rayon::join(
                        || flatten_overlay(change.before_sensitive.as_ref()),
                        || flatten_overlay(change.after_sensitive.as_ref()),
                    )
                },
            )
        },
    );

    mark(&mut after, &unknown, KNOWN_AFTER_APPLY);
    mark(&mut before, &before_sensitive, SENSITIVE_VALUE);
    mark(&mut after, &after_sensitive, SENSITIVE_VALUE);

    diff_flat_maps(&before, &after)
}

fn flatten_overlay(overlay: Option<&PlanValue>) -> FlatMap {
    overlay.map(flatten_value).unwrap_or_default()
}

/// Overwrite every path the overlay flags with `true`.
fn mark(target: &mut FlatMap, overlay: &FlatMap, placeholder: &str) {
    for (path, flag) in overlay {
        if flag == "true" {
            target.insert(path.clone(), placeholder.to_string());
        }
    }
}

/// Diff two flattened states; equal paths are omitted.
#[must_use]
pub fn diff_flat_maps(before: &FlatMap, after: &FlatMap) -> EntityDiff {
    let mut diff = EntityDiff::new();

    for (path, old) in before {
        match after.get(path) {
            None => {
                diff.insert(path.clone(), AttributeDiff::new(old.as_str(), EMPTY));
            }
            Some(new) if new != old => {
                diff.insert(path.clone(), AttributeDiff::new(old.as_str(), new.as_str()));
            }
            Some(_) => {}
        }
    }

    for (path, new) in after {
        if !before.contains_key(path) {
            diff.insert(path.clone(), AttributeDiff::new(EMPTY, new.as_str()));
        }
    }

    diff
}
