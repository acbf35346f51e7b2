//! Checks run on configuration before a command starts.
//!
//! Validation only looks at the filesystem for paths the command will touch;
//! plan and filter documents are checked when they are loaded.

use super::types::{AppConfig, BehaviorConfig, CompareConfig, FilterConfig, InspectConfig, OutputConfig};
use std::path::Path;

/// A single rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// Dotted name of the offending setting (`output.file`, `plan-a`, ...)
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Configuration that can report its own problems.
pub trait Validatable {
    /// All problems found; empty when the value is usable.
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn require_parent_dir(field: &str, path: &Path) -> Option<ConfigError> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty())?;
    (!parent.is_dir()).then(|| {
        ConfigError::new(
            field,
            format!("Parent directory does not exist: {}", parent.display()),
        )
    })
}

fn require_plan_arg(field: &str, value: &str) -> Option<ConfigError> {
    value
        .trim()
        .is_empty()
        .then(|| ConfigError::new(field, format!("{field} cannot be empty")))
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.file
            .as_deref()
            .and_then(|file| require_parent_dir("output.file", file))
            .into_iter()
            .collect()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        match self.filter_file.as_deref() {
            Some(file) if !file.is_file() => vec![ConfigError::new(
                "filter.filter_file",
                format!("Filter file does not exist: {}", file.display()),
            )],
            _ => Vec::new(),
        }
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            self.output.validate(),
            self.behavior.validate(),
            self.filter.validate(),
        ]
        .concat()
    }
}

impl Validatable for InspectConfig {
    fn validate(&self) -> Vec<ConfigError> {
        require_plan_arg("plan", &self.plan)
            .into_iter()
            .chain(self.output.validate())
            .collect()
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        require_plan_arg("plan-a", &self.plan_a)
            .into_iter()
            .chain(require_plan_arg("plan-b", &self.plan_b))
            .chain(self.output.validate())
            .collect()
    }
}
