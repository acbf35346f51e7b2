//! Flattening of nested plan values into `path -> value` maps.
//!
//! Map keys extend the path with `.key`, list elements with `.[i]`. A
//! non-empty list of strings collapses into a single comma-joined value stored
//! under `path.`. Null leaves produce nothing and containers never appear as
//! keys, so the map holds exactly one entry per non-null scalar leaf.

use crate::model::PlanValue;
use std::collections::HashMap;

/// Flattened attribute path -> rendered leaf value.
pub type FlatMap = HashMap<String, String>;

/// Flatten `value` rooted at `path` into `out`.
pub fn flatten(path: &str, value: &PlanValue, out: &mut FlatMap) {
    match value {
        PlanValue::Null => {}
        PlanValue::Map(map) => {
            for (key, child) in map {
                flatten(&format!("{path}.{key}"), child, out);
            }
        }
        PlanValue::List(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(&format!("{path}.[{index}]"), child, out);
            }
        }
        PlanValue::StringList(items) => {
            out.insert(format!("{path}."), items.join(","));
        }
        scalar => {
            if let Some(rendered) = scalar.render_scalar() {
                let key = if path.is_empty() { "." } else { path };
                out.insert(key.to_string(), rendered);
            }
        }
    }
}

/// Flatten a whole value from the root.
#[must_use]
pub fn flatten_value(value: &PlanValue) -> FlatMap {
    let mut out = FlatMap::new();
    flatten("", value, &mut out);
    out
}
