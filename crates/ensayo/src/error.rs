//! Error types for the ensayo core library

use std::path::PathBuf;
use thiserror::Error;

/// Result type for ensayo operations
pub type EnsayoResult<T> = Result<T, EnsayoError>;

/// A single validation finding: the offending field path plus a message.
///
/// Collected in full by the validator; never raised one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted field path, e.g. `coverage.threshold.branches`
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn render_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors that can occur in the ensayo core
#[derive(Debug, Error)]
pub enum EnsayoError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or coverage file exists but could not be parsed.
    ///
    /// Distinct from "no config found", which is not an error at all.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// Path of the unparsable file
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// One or more validation rules were violated.
    ///
    /// Carries the full list so callers see every problem in one pass.
    #[error("configuration validation failed:\n{}", render_validation_errors(.errors))]
    Validation {
        /// All violations, in check order
        errors: Vec<ValidationError>,
    },
}

impl EnsayoError {
    /// Create a parse error
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The validation errors carried by this error, if any
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("coverage.threshold.branches", "must be in 0-100");
        assert_eq!(
            err.to_string(),
            "coverage.threshold.branches: must be in 0-100"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = EnsayoError::parse("ensayo.config.json", "unexpected token");
        assert!(err.to_string().contains("ensayo.config.json"));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_validation_aggregate_carries_every_error() {
        let err = EnsayoError::Validation {
            errors: vec![
                ValidationError::new("framework", "unknown framework"),
                ValidationError::new("parallel.workers", "must be at least 1"),
                ValidationError::new("snapshot.threshold", "must be in 0-1"),
            ],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("framework: unknown framework"));
        assert!(rendered.contains("parallel.workers: must be at least 1"));
        assert!(rendered.contains("snapshot.threshold: must be in 0-1"));
        assert_eq!(err.validation_errors().len(), 3);
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EnsayoError = io_err.into();
        assert!(err.to_string().contains("I/O"));
        assert!(err.validation_errors().is_empty());
    }
}
