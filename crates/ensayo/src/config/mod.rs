//! Testing configuration tree
//!
//! The configuration is a tree of optional sections. User-supplied files
//! (JSON, YAML or TOML) deserialize into partial trees; the loader merges
//! them over the built-in default so that every field the default defines
//! is populated afterwards. Field names are camelCase on the wire to match
//! the JS-ecosystem config files this tool consumes.

mod loader;
mod merge;
mod validator;

pub use loader::{default_config, ConfigLoader, LoadedConfig};
pub use merge::merge_config;
pub use validator::{check_warnings, validate, validate_strict, E2E_FRAMEWORKS, UNIT_FRAMEWORKS};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level testing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestingConfig {
    /// Unit test framework (`vitest` or `jest`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Root test directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<String>,
    /// Test file match globs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_match: Option<Vec<String>>,
    /// Unit test section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitConfig>,
    /// E2E test section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e2e: Option<E2eConfig>,
    /// Coverage section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageConfig>,
    /// Mock section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<MockConfig>,
    /// Snapshot section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<SnapshotConfig>,
    /// Parallel execution section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,
    /// Ignored files and directories (globs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    /// Run in watch mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<bool>,
    /// Environment variables passed to the runners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

/// Unit test configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitConfig {
    /// Test directory override for unit tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<String>,
    /// Match globs override for unit tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_match: Option<Vec<String>>,
    /// Setup files executed before the suite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_files: Option<Vec<String>>,
    /// Per-test timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// Clear mock state after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_mocks: Option<bool>,
    /// Reset mock implementations after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_mocks: Option<bool>,
    /// Restore original implementations after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_mocks: Option<bool>,
    /// Named globals injected into the test environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<BTreeMap<String, serde_json::Value>>,
}

/// E2E test configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct E2eConfig {
    /// E2E framework (`playwright` or `cypress`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Base URL the application under test is served from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Test directory for E2E tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_dir: Option<String>,
    /// Browsers to run against (`chromium`, `firefox`, `webkit`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browsers: Option<Vec<String>>,
    /// Run browsers headless
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headless: Option<bool>,
    /// Per-test timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    /// Retry count for failing tests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    /// Screenshot capture mode (`on`, `off`, `only-on-failure`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Video capture mode (`on`, `off`, `retain-on-failure`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// Coverage configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverageConfig {
    /// Collect coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Coverage provider (`v8` or `istanbul`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Report formats (`text`, `json`, `html`, `lcov`, `cobertura`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<Vec<String>>,
    /// Output directory for reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_directory: Option<String>,
    /// Included file globs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Excluded file globs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// Minimum acceptable coverage per metric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<ThresholdConfig>,
}

/// Minimum acceptable coverage percentages, per metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThresholdConfig {
    /// Branch coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<f64>,
    /// Function coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<f64>,
    /// Line coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<f64>,
    /// Statement coverage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statements: Option<f64>,
}

impl ThresholdConfig {
    /// Create a threshold requiring the same percentage for every metric
    #[must_use]
    pub const fn uniform(pct: f64) -> Self {
        Self {
            branches: Some(pct),
            functions: Some(pct),
            lines: Some(pct),
            statements: Some(pct),
        }
    }

    /// Iterate over the configured metrics as `(name, value)` pairs
    pub fn configured(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("branches", self.branches),
            ("functions", self.functions),
            ("lines", self.lines),
            ("statements", self.statements),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Mock configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MockConfig {
    /// Clear mock state after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_mocks: Option<bool>,
    /// Reset mock implementations after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_mocks: Option<bool>,
    /// Restore original implementations after each test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_mocks: Option<bool>,
    /// Faker settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faker: Option<FakerConfig>,
    /// MSW settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msw: Option<MswConfig>,
}

/// Faker settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FakerConfig {
    /// Data locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Random seed for reproducible data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// MSW settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MswConfig {
    /// API base URL for request handlers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Path to the handlers module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handlers: Option<String>,
    /// Suppress request logging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
}

/// Snapshot configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapshotConfig {
    /// Snapshot directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_dir: Option<String>,
    /// Update policy (`all`, `new`, `none`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_snapshot: Option<String>,
    /// Visual diff threshold in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Parallel execution configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallelConfig {
    /// Run test files in parallel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Worker count; absent means one per CPU core
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<u32>,
    /// Shard descriptor for distributed CI runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<ShardConfig>,
}

/// Shard descriptor: which slice of the suite this process runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardConfig {
    /// Current shard index (1-based)
    pub current: u32,
    /// Total number of shards
    pub total: u32,
}
