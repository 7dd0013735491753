//! Named configuration presets
//!
//! A preset is an immutable configuration fragment for a project archetype.
//! The registry is an explicitly constructed value threaded through call
//! sites, not a process-wide singleton, so tests can build isolated
//! registries. Built-ins differ only in data: test-match globs, coverage
//! thresholds (70/80/90 depending on archetype) and setup files.

use crate::config::{
    merge_config, CoverageConfig, ParallelConfig, TestingConfig, ThresholdConfig, UnitConfig,
};
use std::collections::HashMap;

/// A named, immutable configuration fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Preset name, the registry key
    pub name: String,
    /// Configuration fragment applied under user overrides
    pub config: TestingConfig,
}

impl Preset {
    /// Create a new preset
    #[must_use]
    pub fn new(name: impl Into<String>, config: TestingConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Registry of presets, read-only after construction
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, Preset>,
}

impl PresetRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the built-in presets
    /// (`base`, `vue`, `react`, `node`, `library`)
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(base_preset());
        registry.register(vue_preset());
        registry.register(react_preset());
        registry.register(node_preset());
        registry.register(library_preset());
        registry
    }

    /// Insert or overwrite a preset under its name key.
    ///
    /// No validation happens here; fragments are validated after merge.
    pub fn register(&mut self, preset: Preset) {
        tracing::debug!(name = %preset.name, "preset registered");
        self.presets.insert(preset.name.clone(), preset);
    }

    /// Look up a preset by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Look up a preset's configuration fragment by name
    #[must_use]
    pub fn config(&self, name: &str) -> Option<&TestingConfig> {
        self.get(name).map(|p| &p.config)
    }

    /// Check whether a preset is registered
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Registered preset names, sorted for stable display
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply a preset: the named fragment deep-merged with `overrides`
    /// taking precedence on every field, nested thresholds included.
    ///
    /// An unregistered name is not fatal: the overrides come back unchanged
    /// and the fallback is signalled through a warning.
    #[must_use]
    pub fn apply(&self, name: &str, overrides: &TestingConfig) -> TestingConfig {
        let Some(preset) = self.get(name) else {
            tracing::warn!(name, "preset not found, using overrides as-is");
            return overrides.clone();
        };
        tracing::debug!(name, "applying preset");
        merge_config(&preset.config, Some(overrides))
    }
}

fn base_preset() -> Preset {
    Preset::new(
        "base",
        TestingConfig {
            framework: Some("vitest".to_string()),
            test_dir: Some("tests".to_string()),
            test_match: Some(vec![
                "**/*.test.{ts,js}".to_string(),
                "**/*.spec.{ts,js}".to_string(),
            ]),
            coverage: Some(CoverageConfig {
                enabled: Some(true),
                provider: Some("v8".to_string()),
                reporter: Some(vec!["text".to_string(), "html".to_string()]),
                threshold: Some(ThresholdConfig::uniform(80.0)),
                ..CoverageConfig::default()
            }),
            ..TestingConfig::default()
        },
    )
}

fn vue_preset() -> Preset {
    Preset::new(
        "vue",
        TestingConfig {
            framework: Some("vitest".to_string()),
            test_dir: Some("tests".to_string()),
            test_match: Some(vec![
                "**/*.test.{ts,tsx}".to_string(),
                "**/*.spec.{ts,tsx}".to_string(),
            ]),
            unit: Some(UnitConfig {
                setup_files: Some(vec!["tests/setup.ts".to_string()]),
                globals: Some(
                    [
                        ("__VUE_OPTIONS_API__".to_string(), serde_json::json!(true)),
                        ("__VUE_PROD_DEVTOOLS__".to_string(), serde_json::json!(false)),
                    ]
                    .into_iter()
                    .collect(),
                ),
                ..UnitConfig::default()
            }),
            coverage: Some(CoverageConfig {
                enabled: Some(true),
                provider: Some("v8".to_string()),
                reporter: Some(vec![
                    "text".to_string(),
                    "html".to_string(),
                    "lcov".to_string(),
                ]),
                exclude: Some(vec![
                    "**/*.config.ts".to_string(),
                    "**/node_modules/**".to_string(),
                ]),
                threshold: Some(ThresholdConfig::uniform(70.0)),
                ..CoverageConfig::default()
            }),
            ..TestingConfig::default()
        },
    )
}

fn react_preset() -> Preset {
    Preset::new(
        "react",
        TestingConfig {
            framework: Some("vitest".to_string()),
            test_dir: Some("tests".to_string()),
            test_match: Some(vec![
                "**/*.test.{ts,tsx,js,jsx}".to_string(),
                "**/*.spec.{ts,tsx,js,jsx}".to_string(),
            ]),
            unit: Some(UnitConfig {
                setup_files: Some(vec!["tests/setup.ts".to_string()]),
                globals: Some(
                    [(
                        "IS_REACT_ACT_ENVIRONMENT".to_string(),
                        serde_json::json!(true),
                    )]
                    .into_iter()
                    .collect(),
                ),
                ..UnitConfig::default()
            }),
            coverage: Some(CoverageConfig {
                enabled: Some(true),
                provider: Some("v8".to_string()),
                reporter: Some(vec![
                    "text".to_string(),
                    "html".to_string(),
                    "lcov".to_string(),
                ]),
                exclude: Some(vec![
                    "**/*.config.ts".to_string(),
                    "**/node_modules/**".to_string(),
                    "**/*.stories.tsx".to_string(),
                ]),
                threshold: Some(ThresholdConfig::uniform(70.0)),
                ..CoverageConfig::default()
            }),
            ..TestingConfig::default()
        },
    )
}

fn node_preset() -> Preset {
    Preset::new(
        "node",
        TestingConfig {
            framework: Some("vitest".to_string()),
            test_dir: Some("tests".to_string()),
            test_match: Some(vec![
                "**/*.test.ts".to_string(),
                "**/*.spec.ts".to_string(),
            ]),
            unit: Some(UnitConfig {
                timeout: Some(10_000),
                ..UnitConfig::default()
            }),
            coverage: Some(CoverageConfig {
                enabled: Some(true),
                provider: Some("v8".to_string()),
                reporter: Some(vec![
                    "text".to_string(),
                    "json".to_string(),
                    "html".to_string(),
                ]),
                exclude: Some(vec![
                    "**/*.config.ts".to_string(),
                    "**/node_modules/**".to_string(),
                    "**/dist/**".to_string(),
                ]),
                threshold: Some(ThresholdConfig::uniform(80.0)),
                ..CoverageConfig::default()
            }),
            ..TestingConfig::default()
        },
    )
}

fn library_preset() -> Preset {
    Preset::new(
        "library",
        TestingConfig {
            framework: Some("vitest".to_string()),
            test_dir: Some("tests".to_string()),
            test_match: Some(vec![
                "**/*.test.ts".to_string(),
                "**/*.spec.ts".to_string(),
            ]),
            unit: Some(UnitConfig {
                timeout: Some(5000),
                clear_mocks: Some(true),
                reset_mocks: Some(true),
                restore_mocks: Some(true),
                ..UnitConfig::default()
            }),
            coverage: Some(CoverageConfig {
                enabled: Some(true),
                provider: Some("v8".to_string()),
                reporter: Some(vec![
                    "text".to_string(),
                    "json".to_string(),
                    "html".to_string(),
                    "lcov".to_string(),
                ]),
                exclude: Some(vec![
                    "**/*.config.ts".to_string(),
                    "**/node_modules/**".to_string(),
                    "**/dist/**".to_string(),
                    "**/__tests__/**".to_string(),
                ]),
                threshold: Some(ThresholdConfig::uniform(90.0)),
                ..CoverageConfig::default()
            }),
            parallel: Some(ParallelConfig {
                enabled: Some(true),
                ..ParallelConfig::default()
            }),
            ..TestingConfig::default()
        },
    )
}
