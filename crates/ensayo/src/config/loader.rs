//! Configuration discovery and loading
//!
//! Searches a fixed, ordered list of conventional locations rooted at the
//! project directory and stops at the first existing, parseable match.
//! Absence of user configuration is a normal case, not an error; a file
//! that exists but cannot be parsed is.

use super::TestingConfig;
use crate::error::{EnsayoError, EnsayoResult};
use std::path::{Path, PathBuf};

/// Default module name used to derive config file names
pub const DEFAULT_MODULE_NAME: &str = "ensayo";

/// A user configuration together with the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Parsed configuration fragment
    pub config: TestingConfig,
    /// File the fragment was read from
    pub path: PathBuf,
}

/// Discovers and parses user configuration files
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    module_name: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader for the default module name
    #[must_use]
    pub fn new() -> Self {
        Self::with_module_name(DEFAULT_MODULE_NAME)
    }

    /// Create a loader deriving file names from a custom module name
    #[must_use]
    pub fn with_module_name(name: impl Into<String>) -> Self {
        Self {
            module_name: name.into(),
        }
    }

    /// Candidate file names, in search order. First match wins.
    ///
    /// The Cargo manifest is checked first (for a
    /// `[package.metadata.<module>]` table), then dotfile variants, then
    /// `<module>.config.*` variants.
    #[must_use]
    pub fn search_places(&self) -> Vec<String> {
        let name = &self.module_name;
        vec![
            "Cargo.toml".to_string(),
            format!(".{name}rc"),
            format!(".{name}rc.json"),
            format!(".{name}rc.yaml"),
            format!(".{name}rc.yml"),
            format!(".{name}rc.toml"),
            format!("{name}.config.json"),
            format!("{name}.config.yaml"),
            format!("{name}.config.yml"),
            format!("{name}.config.toml"),
        ]
    }

    /// Find the first candidate file that exists under `dir`.
    ///
    /// The Cargo manifest only counts as a match when it carries the
    /// metadata table for this module.
    #[must_use]
    pub fn find(&self, dir: &Path) -> Option<PathBuf> {
        for place in self.search_places() {
            let candidate = dir.join(&place);
            if !candidate.is_file() {
                continue;
            }
            if place == "Cargo.toml" && !self.manifest_has_metadata(&candidate) {
                continue;
            }
            return Some(candidate);
        }
        None
    }

    /// Load the first existing, parseable configuration under `dir`.
    ///
    /// Returns `Ok(None)` when no configuration exists; returns a parse
    /// error when a candidate exists but cannot be read as a config tree.
    pub fn load(&self, dir: &Path) -> EnsayoResult<Option<LoadedConfig>> {
        let Some(path) = self.find(dir) else {
            tracing::debug!(dir = %dir.display(), "no config file found, using defaults");
            return Ok(None);
        };

        let config = self.parse_file(&path)?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(Some(LoadedConfig { config, path }))
    }

    fn parse_file(&self, path: &Path) -> EnsayoResult<TestingConfig> {
        let content = std::fs::read_to_string(path)?;

        if path.file_name().is_some_and(|n| n == "Cargo.toml") {
            return self.parse_manifest(path, &content);
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => serde_yaml_ng::from_str(&content)
                .map_err(|e| EnsayoError::parse(path, e.to_string())),
            Some("toml") => {
                toml::from_str(&content).map_err(|e| EnsayoError::parse(path, e.to_string()))
            }
            // `.json` and the bare rc dotfile are both JSON
            _ => serde_json::from_str(&content)
                .map_err(|e| EnsayoError::parse(path, e.to_string())),
        }
    }

    /// Extract `[package.metadata.<module>]` from a Cargo manifest.
    fn parse_manifest(&self, path: &Path, content: &str) -> EnsayoResult<TestingConfig> {
        let manifest: toml::Value =
            toml::from_str(content).map_err(|e| EnsayoError::parse(path, e.to_string()))?;
        let Some(table) = metadata_table(&manifest, &self.module_name) else {
            // find() only hands us manifests that carry the table
            return Ok(TestingConfig::default());
        };
        table
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| EnsayoError::parse(path, e.to_string()))
    }

    fn manifest_has_metadata(&self, path: &Path) -> bool {
        let Ok(content) = std::fs::read_to_string(path) else {
            return false;
        };
        let Ok(manifest) = toml::from_str::<toml::Value>(&content) else {
            return false;
        };
        metadata_table(&manifest, &self.module_name).is_some()
    }
}

fn metadata_table<'a>(manifest: &'a toml::Value, module_name: &str) -> Option<&'a toml::Value> {
    manifest
        .get("package")?
        .get("metadata")?
        .get(module_name)
}

/// The built-in default configuration: the merge base when no user or
/// preset configuration is supplied. Every field listed here has a
/// concrete value, so a merged configuration is always fully defaulted.
#[must_use]
pub fn default_config() -> TestingConfig {
    use super::{
        CoverageConfig, E2eConfig, FakerConfig, MockConfig, ParallelConfig, SnapshotConfig,
        ThresholdConfig, UnitConfig,
    };

    TestingConfig {
        framework: Some("vitest".to_string()),
        test_dir: Some("tests".to_string()),
        test_match: Some(vec![
            "**/*.test.{ts,tsx,js,jsx}".to_string(),
            "**/*.spec.{ts,tsx,js,jsx}".to_string(),
        ]),
        unit: Some(UnitConfig {
            timeout: Some(5000),
            clear_mocks: Some(true),
            reset_mocks: Some(true),
            restore_mocks: Some(true),
            ..UnitConfig::default()
        }),
        e2e: Some(E2eConfig {
            framework: Some("playwright".to_string()),
            base_url: Some("http://localhost:3000".to_string()),
            test_dir: Some("tests/e2e".to_string()),
            browsers: Some(vec!["chromium".to_string()]),
            headless: Some(true),
            timeout: Some(30_000),
            retries: Some(0),
            screenshot: Some("only-on-failure".to_string()),
            video: Some("retain-on-failure".to_string()),
        }),
        coverage: Some(CoverageConfig {
            enabled: Some(false),
            provider: Some("v8".to_string()),
            reporter: Some(vec![
                "text".to_string(),
                "json".to_string(),
                "html".to_string(),
            ]),
            reports_directory: Some("coverage".to_string()),
            include: None,
            exclude: None,
            threshold: Some(ThresholdConfig::uniform(80.0)),
        }),
        mock: Some(MockConfig {
            clear_mocks: Some(true),
            reset_mocks: Some(true),
            restore_mocks: Some(true),
            faker: Some(FakerConfig {
                locale: Some("en".to_string()),
                seed: None,
            }),
            msw: None,
        }),
        snapshot: Some(SnapshotConfig {
            snapshot_dir: Some("__snapshots__".to_string()),
            update_snapshot: Some("new".to_string()),
            threshold: Some(0.01),
        }),
        parallel: Some(ParallelConfig {
            enabled: Some(true),
            // Absent workers means one per CPU core, decided by the runner
            workers: None,
            shard: None,
        }),
        ignore: Some(vec![
            "**/node_modules/**".to_string(),
            "**/dist/**".to_string(),
            "**/coverage/**".to_string(),
        ]),
        watch: Some(false),
        env: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    mod search_tests {
        use super::*;

        #[test]
        fn test_search_places_order() {
            let loader = ConfigLoader::new();
            let places = loader.search_places();
            assert_eq!(places[0], "Cargo.toml");
            assert_eq!(places[1], ".ensayorc");
            assert_eq!(places.last().unwrap(), "ensayo.config.toml");
        }

        #[test]
        fn test_custom_module_name() {
            let loader = ConfigLoader::with_module_name("testing");
            assert!(loader
                .search_places()
                .contains(&"testing.config.json".to_string()));
        }

        #[test]
        fn test_find_returns_none_in_empty_dir() {
            let dir = TempDir::new().unwrap();
            let loader = ConfigLoader::new();
            assert_eq!(loader.find(dir.path()), None);
        }

        #[test]
        fn test_find_first_match_wins() {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join(".ensayorc"), "{}").unwrap();
            fs::write(dir.path().join("ensayo.config.json"), "{}").unwrap();
            let loader = ConfigLoader::new();
            assert_eq!(loader.find(dir.path()).unwrap(), dir.path().join(".ensayorc"));
        }

        #[test]
        fn test_manifest_without_metadata_is_not_a_match() {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join("Cargo.toml"),
                "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n",
            )
            .unwrap();
            let loader = ConfigLoader::new();
            assert_eq!(loader.find(dir.path()), None);
        }
    }

    mod load_tests {
        use super::*;

        #[test]
        fn test_load_returns_none_when_no_config() {
            let dir = TempDir::new().unwrap();
            let loader = ConfigLoader::new();
            assert!(loader.load(dir.path()).unwrap().is_none());
        }

        #[test]
        fn test_load_json_config() {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join("ensayo.config.json"),
                r#"{"framework":"jest","testDir":"spec"}"#,
            )
            .unwrap();
            let loaded = ConfigLoader::new().load(dir.path()).unwrap().unwrap();
            assert_eq!(loaded.config.framework.as_deref(), Some("jest"));
            assert_eq!(loaded.config.test_dir.as_deref(), Some("spec"));
            assert_eq!(loaded.path, dir.path().join("ensayo.config.json"));
        }

        #[test]
        fn test_load_yaml_config() {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join(".ensayorc.yaml"),
                "framework: vitest\ncoverage:\n  threshold:\n    branches: 75\n",
            )
            .unwrap();
            let loaded = ConfigLoader::new().load(dir.path()).unwrap().unwrap();
            let threshold = loaded.config.coverage.unwrap().threshold.unwrap();
            assert_eq!(threshold.branches, Some(75.0));
        }

        #[test]
        fn test_load_toml_config() {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join("ensayo.config.toml"),
                "framework = \"vitest\"\n\n[e2e]\nretries = 2\n",
            )
            .unwrap();
            let loaded = ConfigLoader::new().load(dir.path()).unwrap().unwrap();
            assert_eq!(loaded.config.e2e.unwrap().retries, Some(2));
        }

        #[test]
        fn test_load_bare_rc_is_json() {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join(".ensayorc"), r#"{"watch":true}"#).unwrap();
            let loaded = ConfigLoader::new().load(dir.path()).unwrap().unwrap();
            assert_eq!(loaded.config.watch, Some(true));
        }

        #[test]
        fn test_load_manifest_metadata() {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join("Cargo.toml"),
                concat!(
                    "[package]\n",
                    "name = \"demo\"\n",
                    "version = \"0.1.0\"\n\n",
                    "[package.metadata.ensayo]\n",
                    "framework = \"jest\"\n\n",
                    "[package.metadata.ensayo.parallel]\n",
                    "workers = 2\n",
                ),
            )
            .unwrap();
            let loaded = ConfigLoader::new().load(dir.path()).unwrap().unwrap();
            assert_eq!(loaded.config.framework.as_deref(), Some("jest"));
            assert_eq!(loaded.config.parallel.unwrap().workers, Some(2));
        }

        #[test]
        fn test_malformed_config_is_a_parse_error_not_notfound() {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("ensayo.config.json"), "{not json").unwrap();
            let err = ConfigLoader::new().load(dir.path()).unwrap_err();
            assert!(matches!(err, EnsayoError::Parse { .. }));
        }
    }

    mod default_config_tests {
        use super::*;

        #[test]
        fn test_default_config_is_fully_populated() {
            let config = default_config();
            assert!(config.framework.is_some());
            assert!(config.test_dir.is_some());
            assert!(config.test_match.is_some());
            assert!(config.unit.is_some());
            assert!(config.e2e.is_some());
            assert!(config.coverage.is_some());
            assert!(config.mock.is_some());
            assert!(config.snapshot.is_some());
            assert!(config.parallel.is_some());
            assert!(config.ignore.is_some());
            assert!(config.watch.is_some());
        }

        #[test]
        fn test_default_thresholds_are_eighty() {
            let config = default_config();
            let threshold = config.coverage.unwrap().threshold.unwrap();
            assert_eq!(threshold, crate::ThresholdConfig::uniform(80.0));
        }

        #[test]
        fn test_default_e2e_values() {
            let e2e = default_config().e2e.unwrap();
            assert_eq!(e2e.framework.as_deref(), Some("playwright"));
            assert_eq!(e2e.headless, Some(true));
            assert_eq!(e2e.timeout, Some(30_000));
            assert_eq!(e2e.browsers.unwrap(), vec!["chromium".to_string()]);
        }
    }
}
