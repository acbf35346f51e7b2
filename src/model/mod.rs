//! Input model for Terraform JSON plans.
//!
//! [`Plan`] holds the three collections the inspector walks (resource changes,
//! resource drift and output changes). Each entity carries a [`Change`] made of
//! [`PlanValue`] trees.

mod plan;
mod value;

pub use plan::{parse_plan_str, Change, Plan, ResourceChange};
pub use value::{deserialize_overlay, PlanValue};
