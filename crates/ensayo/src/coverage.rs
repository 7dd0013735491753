//! Coverage summaries and threshold validation
//!
//! The coverage summary is an opaque input produced by the external
//! runner's coverage provider (the istanbul-style `coverage-summary.json`).
//! This module reads it, compares it against configured minimums and
//! derives a coarse quality analysis. Threshold failures are data, never
//! errors: the caller inspects `passed` and decides exit behavior.

use crate::config::ThresholdConfig;
use crate::error::{EnsayoError, EnsayoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-metric coverage counts and percentage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageDetail {
    /// Total countable items
    pub total: u64,
    /// Covered items
    pub covered: u64,
    /// Skipped items
    pub skipped: u64,
    /// Precomputed percentage, 0-100
    pub pct: f64,
}

/// Coverage totals for the four metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageSummary {
    /// Line coverage
    pub lines: CoverageDetail,
    /// Statement coverage
    pub statements: CoverageDetail,
    /// Function coverage
    pub functions: CoverageDetail,
    /// Branch coverage
    pub branches: CoverageDetail,
}

impl CoverageSummary {
    /// Metrics as `(name, detail)` pairs, in report order
    #[must_use]
    pub fn metrics(&self) -> [(&'static str, CoverageDetail); 4] {
        [
            ("statements", self.statements),
            ("branches", self.branches),
            ("functions", self.functions),
            ("lines", self.lines),
        ]
    }
}

/// Read the `total` record of an istanbul-style `coverage-summary.json`.
pub fn read_summary(path: &Path) -> EnsayoResult<CoverageSummary> {
    #[derive(Deserialize)]
    struct SummaryFile {
        total: CoverageSummary,
    }

    let content = std::fs::read_to_string(path)?;
    let file: SummaryFile =
        serde_json::from_str(&content).map_err(|e| EnsayoError::parse(path, e.to_string()))?;
    Ok(file.total)
}

/// A single metric below its configured minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdFailure {
    /// Metric name (`branches`, `functions`, `lines`, `statements`)
    pub metric: String,
    /// Achieved percentage
    pub actual: f64,
    /// Configured minimum percentage
    pub expected: f64,
}

/// Outcome of comparing a summary against configured thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// True iff no configured metric fell short
    pub passed: bool,
    /// Every metric that fell short
    pub failures: Vec<ThresholdFailure>,
}

/// Compare achieved coverage against configured minimums.
///
/// A metric with no configured threshold is skipped, not a failure.
/// Equality passes; strictly less fails. `passed` is a pure conjunction
/// over the configured metrics, with no weighting or aggregate score.
#[must_use]
pub fn validate_thresholds(
    summary: &CoverageSummary,
    threshold: &ThresholdConfig,
) -> ThresholdResult {
    let actuals = [
        ("branches", summary.branches.pct, threshold.branches),
        ("functions", summary.functions.pct, threshold.functions),
        ("lines", summary.lines.pct, threshold.lines),
        ("statements", summary.statements.pct, threshold.statements),
    ];

    let failures: Vec<ThresholdFailure> = actuals
        .into_iter()
        .filter_map(|(metric, actual, expected)| {
            let expected = expected?;
            (actual < expected).then(|| ThresholdFailure {
                metric: metric.to_string(),
                actual,
                expected,
            })
        })
        .collect();

    ThresholdResult {
        passed: failures.is_empty(),
        failures,
    }
}

/// Letter grade for an overall coverage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// 90% and above
    A,
    /// 80% and above
    B,
    /// 70% and above
    C,
    /// 60% and above
    D,
    /// Below 60%
    F,
}

impl Grade {
    /// Grade for a 0-100 score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Coarse quality analysis of a coverage summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    /// Mean of the four metric percentages
    pub score: f64,
    /// Letter grade for the score
    pub grade: Grade,
    /// Concrete per-metric improvement suggestions
    pub recommendations: Vec<String>,
}

/// Analyze a summary: overall score, grade and per-metric recommendations.
#[must_use]
pub fn analyze(summary: &CoverageSummary) -> CoverageAnalysis {
    let metrics = summary.metrics();
    let score = metrics.iter().map(|(_, d)| d.pct).sum::<f64>() / metrics.len() as f64;

    let recommendations = metrics
        .iter()
        .filter(|(_, detail)| detail.pct < 80.0)
        .map(|(name, detail)| {
            format!(
                "{name} coverage is {:.1}% ({}/{} covered); aim for at least 80%",
                detail.pct, detail.covered, detail.total
            )
        })
        .collect();

    CoverageAnalysis {
        score,
        grade: Grade::from_score(score),
        recommendations,
    }
}
