//! Configuration validation
//!
//! Every check is evaluated independently; the full error list is always
//! produced rather than stopping at the first violation, so callers can
//! surface every problem in one pass.

use super::TestingConfig;
use crate::error::{EnsayoError, EnsayoResult, ValidationError};

/// Recognized unit test frameworks
pub const UNIT_FRAMEWORKS: &[&str] = &["vitest", "jest"];

/// Recognized E2E frameworks
pub const E2E_FRAMEWORKS: &[&str] = &["playwright", "cypress"];

/// Validate a configuration, returning every violation found.
///
/// An empty result means the configuration is acceptable.
#[must_use]
pub fn validate(config: &TestingConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref framework) = config.framework {
        if !UNIT_FRAMEWORKS.contains(&framework.as_str()) {
            errors.push(ValidationError::new(
                "framework",
                format!(
                    "unknown test framework `{framework}`, supported: {}",
                    UNIT_FRAMEWORKS.join(", ")
                ),
            ));
        }
    }

    if let Some(ref test_dir) = config.test_dir {
        if test_dir.trim().is_empty() {
            errors.push(ValidationError::new(
                "testDir",
                "test directory must be a non-empty path",
            ));
        }
    }

    if let Some(threshold) = config.coverage.as_ref().and_then(|c| c.threshold.as_ref()) {
        for (metric, value) in [
            ("branches", threshold.branches),
            ("functions", threshold.functions),
            ("lines", threshold.lines),
            ("statements", threshold.statements),
        ] {
            if let Some(value) = value {
                if !(0.0..=100.0).contains(&value) {
                    errors.push(ValidationError::new(
                        format!("coverage.threshold.{metric}"),
                        format!("coverage threshold must be in 0-100, got {value}"),
                    ));
                }
            }
        }
    }

    if let Some(framework) = config.e2e.as_ref().and_then(|e| e.framework.as_ref()) {
        if !E2E_FRAMEWORKS.contains(&framework.as_str()) {
            errors.push(ValidationError::new(
                "e2e.framework",
                format!(
                    "unknown E2E framework `{framework}`, supported: {}",
                    E2E_FRAMEWORKS.join(", ")
                ),
            ));
        }
    }

    if let Some(timeout) = config.unit.as_ref().and_then(|u| u.timeout) {
        if timeout < 0 {
            errors.push(ValidationError::new(
                "unit.timeout",
                format!("timeout must be at least 0, got {timeout}"),
            ));
        }
    }

    if let Some(timeout) = config.e2e.as_ref().and_then(|e| e.timeout) {
        if timeout < 0 {
            errors.push(ValidationError::new(
                "e2e.timeout",
                format!("timeout must be at least 0, got {timeout}"),
            ));
        }
    }

    if let Some(retries) = config.e2e.as_ref().and_then(|e| e.retries) {
        if retries < 0 {
            errors.push(ValidationError::new(
                "e2e.retries",
                format!("retry count must be at least 0, got {retries}"),
            ));
        }
    }

    if let Some(workers) = config.parallel.as_ref().and_then(|p| p.workers) {
        if workers < 1 {
            errors.push(ValidationError::new(
                "parallel.workers",
                format!("worker count must be at least 1, got {workers}"),
            ));
        }
    }

    if let Some(threshold) = config.snapshot.as_ref().and_then(|s| s.threshold) {
        if !(0.0..=1.0).contains(&threshold) {
            errors.push(ValidationError::new(
                "snapshot.threshold",
                format!("snapshot diff threshold must be in 0-1, got {threshold}"),
            ));
        }
    }

    errors
}

/// Validate and fail with a single aggregate error carrying every violation.
pub fn validate_strict(config: &TestingConfig) -> EnsayoResult<()> {
    let errors = validate(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EnsayoError::Validation { errors })
    }
}

/// Advisory findings for risky-but-valid settings. Never block execution.
#[must_use]
pub fn check_warnings(config: &TestingConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(ref coverage) = config.coverage {
        if coverage.enabled == Some(true) {
            if let Some(ref threshold) = coverage.threshold {
                if threshold.configured().any(|(_, pct)| pct < 50.0) {
                    warnings.push(
                        "coverage thresholds below 50% may not be enough to guard code quality"
                            .to_string(),
                    );
                }
            }
        }
    }

    if let Some(ref parallel) = config.parallel {
        if parallel.enabled == Some(true) && parallel.workers.is_some_and(|w| w > 16) {
            warnings.push(
                "more than 16 workers may exhaust system resources".to_string(),
            );
        }
    }

    if let Some(browsers) = config.e2e.as_ref().and_then(|e| e.browsers.as_ref()) {
        if browsers.len() > 3 {
            warnings.push(
                "testing many browsers at once will increase total run time".to_string(),
            );
        }
    }

    warnings
}
