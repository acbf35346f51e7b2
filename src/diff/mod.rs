//! Attribute-level diffing of Terraform plans.
//!
//! # Architecture
//!
//! - [`flatten`]: nested plan values to `path -> value` maps
//! - [`normalize`](normalize::normalize): one change to an [`EntityDiff`]
//! - [`InspectEngine`]: every entity of a plan, then the filter
//! - [`compare_inspections`]: divergence between two inspections
//!
//! # Example
//!
//! ```ignore
//! use tfplan_tools::diff::InspectEngine;
//!
//! let engine = InspectEngine::new().with_filter(filter);
//! let result = engine.inspect(&plan)?;
//! if !result.is_empty() {
//!     println!("{}", result.counts());
//! }
//! ```

mod compare;
pub mod flatten;
mod inspect;
pub mod normalize;
mod result;

pub use compare::{compare_inspections, entity_divergence};
pub use flatten::{flatten, flatten_value, FlatMap};
pub use inspect::InspectEngine;
pub use normalize::{diff_flat_maps, normalize};
pub use result::{
    AttributeDiff, CollectionKind, ComparisonCollection, ComparisonDiff, ComparisonEntry,
    ComparisonResult, DiffCollection, DiffCounts, EntityDiff, InspectionDiff, InspectionResult,
    EMPTY, KNOWN_AFTER_APPLY, SENSITIVE_VALUE,
};
