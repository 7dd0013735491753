//! Ensayo: configuration composition and validation for JS test tooling
//!
//! Ensayo (Spanish: "rehearsal") is the core of a thin orchestration layer
//! over third-party testing frameworks (Vitest/Jest, Playwright/Cypress,
//! Faker, MSW). It normalizes configuration so the CLI can hand a single,
//! fully-defaulted tree to the external runners:
//!
//! ```text
//! default config ──merge──► preset ──merge──► user config
//!                                                  │
//!                                             validation
//!                                                  │
//!                                     runners / threshold checks
//! ```
//!
//! Everything here is a synchronous, pure computation over in-memory
//! records, except configuration discovery, which reads the file system.
//!
//! # Example
//!
//! ```
//! use ensayo::{default_config, merge_config, validate, PresetRegistry, TestingConfig};
//!
//! let registry = PresetRegistry::with_builtins();
//! let user = TestingConfig::default();
//! let overlay = registry.apply("library", &user);
//! let merged = merge_config(&default_config(), Some(&overlay));
//! assert!(validate(&merged).is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod coverage;
mod error;
mod preset;

pub use config::{
    check_warnings, default_config, merge_config, validate, validate_strict, ConfigLoader,
    CoverageConfig, E2eConfig, FakerConfig, LoadedConfig, MockConfig, MswConfig, ParallelConfig,
    ShardConfig, SnapshotConfig, TestingConfig, ThresholdConfig, UnitConfig,
};
pub use coverage::{
    analyze, read_summary, validate_thresholds, CoverageAnalysis, CoverageDetail, CoverageSummary,
    Grade, ThresholdFailure, ThresholdResult,
};
pub use error::{EnsayoError, EnsayoResult, ValidationError};
pub use preset::{Preset, PresetRegistry};
