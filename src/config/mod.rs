//! Configuration module for tfplan-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tfplan_tools::config::{AppConfig, file::load_or_default};
//!
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.tfplan-tools.yaml` file in your project root or `~/.config/tfplan-tools/`:
//!
//! ```yaml
//! output:
//!   format: pretty
//! behavior:
//!   detailed_exitcode: true
//! filter:
//!   filter_file: ./plan-filter.json
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, CompareConfigBuilder,
    FilterConfig, InspectConfig, InspectConfigBuilder, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.tfplan-tools.yaml` config files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"output\""));
        assert!(schema.contains("\"detailed_exitcode\""));
        assert!(schema.contains("\"filter_file\""));
    }
}
