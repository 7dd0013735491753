//! Command handlers

pub mod config;
pub mod coverage;
pub mod init;
pub mod presets;
pub mod run;

use crate::config::CliConfig;
use crate::error::CliResult;
use ensayo::{default_config, merge_config, ConfigLoader, PresetRegistry, TestingConfig};

/// Resolve the effective configuration for a command:
/// `default -> preset (if selected) -> user config`, user config winning.
pub fn resolve_config(
    cli: &CliConfig,
    registry: &PresetRegistry,
    preset: Option<&str>,
) -> CliResult<TestingConfig> {
    let loader = ConfigLoader::new();
    let user = loader.load(&cli.cwd)?;
    if let Some(ref loaded) = user {
        tracing::debug!(path = %loaded.path.display(), "user config found");
    }
    let user = user.map(|loaded| loaded.config);

    let overlay = match (preset, user) {
        (Some(name), Some(user)) => Some(registry.apply(name, &user)),
        (Some(name), None) => Some(registry.apply(name, &TestingConfig::default())),
        (None, user) => user,
    };

    tracing::debug!(preset = preset.unwrap_or("none"), "configuration resolved");
    Ok(merge_config(&default_config(), overlay.as_ref()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_user_config_is_default() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let registry = PresetRegistry::with_builtins();
        let config = resolve_config(&cli, &registry, None).unwrap();
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_resolve_user_config_wins_over_preset() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ensayo.config.json"),
            r#"{"coverage":{"threshold":{"branches":65}}}"#,
        )
        .unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let registry = PresetRegistry::with_builtins();
        let config = resolve_config(&cli, &registry, Some("library")).unwrap();
        let threshold = config.coverage.unwrap().threshold.unwrap();
        // User config wins over the preset on the field it sets
        assert_eq!(threshold.branches, Some(65.0));
        // Preset (library: 90) wins over the default (80) elsewhere
        assert_eq!(threshold.lines, Some(90.0));
    }

    #[test]
    fn test_resolve_unknown_preset_falls_back() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let registry = PresetRegistry::with_builtins();
        let config = resolve_config(&cli, &registry, Some("nonexistent")).unwrap();
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_resolve_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ensayo.config.json"), "{oops").unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let registry = PresetRegistry::with_builtins();
        assert!(resolve_config(&cli, &registry, None).is_err());
    }
}
