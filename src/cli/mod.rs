//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod compare;
mod inspect;

pub use compare::run_compare;
pub use inspect::run_inspect;

// Re-export config types used by handlers
pub use crate::config::{CompareConfig, InspectConfig};

use crate::config::{ConfigError, Validatable};
use anyhow::{bail, Result};

/// Reject a command configuration that fails validation.
fn ensure_valid(config: &dyn Validatable) -> Result<()> {
    let errors: Vec<ConfigError> = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    bail!("invalid configuration: {joined}")
}
