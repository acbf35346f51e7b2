//! Wildcard matching and filter rules.
//!
//! - [`PatternMatcher`]: anchored `*` / `?` globs with a compiled-pattern cache
//! - [`InspectFilter`]: per-collection [`FilterRule`] lists read from JSON
//! - [`FilterEngine`]: suppresses attribute diffs that a rule matches
//!
//! # Example
//!
//! ```ignore
//! use tfplan_tools::matching::{FilterEngine, InspectFilter};
//!
//! let filter = InspectFilter::from_json(r#"{"resourceChanges": [...]}"#)?;
//! let stats = FilterEngine::new(&filter).apply(&mut result.diff)?;
//! ```

pub mod pattern;
pub mod rule_engine;
mod rules;

pub use pattern::{compile_glob, glob_matches, PatternMatcher};
pub use rule_engine::{FilterEngine, FilterStats};
pub use rules::{DiffPattern, FilterRule, InspectFilter};
