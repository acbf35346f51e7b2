//! Unified error types for tfplan-tools.
//!
//! This module provides the error hierarchy for the library, with enough
//! context (entity address, attribute path, pattern) to diagnose a failure
//! without re-running with extra logging.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tfplan-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PlanError {
    /// A plan or filter document could not be read into the expected shape
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// A filter rule could not be evaluated against an entity
    #[error("Failed to apply filter: {context}")]
    Filter {
        context: String,
        #[source]
        source: PatternError,
    },

    /// A required input was not supplied by the caller
    #[error("{0}")]
    Precondition(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Input is empty")]
    EmptyInput,
}

/// Errors raised by the glob pattern matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("pattern '{pattern}' ends with an unterminated escape")]
    TrailingEscape { pattern: String },

    #[error("pattern '{pattern}' could not be compiled: {reason}")]
    Compile { pattern: String, reason: String },
}

impl PatternError {
    /// The offending pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::TrailingEscape { pattern } | Self::Compile { pattern, .. } => pattern,
        }
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for tfplan-tools operations
pub type Result<T> = std::result::Result<T, PlanError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PlanError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a filter error with context
    pub fn filter(context: impl Into<String>, source: PatternError) -> Self {
        Self::Filter {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

/// A bare pattern error is a filter error that has not been located yet.
impl From<PatternError> for PlanError {
    fn from(source: PatternError) -> Self {
        Self::filter("", source)
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any context the error already carries,
/// so a failure deep in the filter engine reads like
/// `"resource changes: unable to match aws_instance.web.ami ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PlanError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PlanError, new_ctx: &str) -> PlanError {
    match err {
        PlanError::Input {
            context: existing,
            source,
        } => PlanError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PlanError::Filter {
            context: existing,
            source,
        } => PlanError::Filter {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PlanError::Io {
            path,
            message,
            source,
        } => PlanError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PlanError::Precondition(msg) => PlanError::Precondition(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as `"new: existing"`.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a precondition error with the given message.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| PlanError::Precondition(context.into()))
    }
}
