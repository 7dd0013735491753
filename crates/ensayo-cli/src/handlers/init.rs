//! Init command handler

use crate::commands::InitArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use ensayo::PresetRegistry;
use std::fs;

const CONFIG_FILE: &str = "ensayo.config.json";

const EXAMPLE_TEST: &str = r#"import { describe, it, expect } from 'vitest';

describe('example', () => {
  it('adds numbers', () => {
    expect(1 + 1).toBe(2);
  });
});
"#;

/// Execute the init command
pub fn execute_init(cli: &CliConfig, args: &InitArgs) -> CliResult<()> {
    let reporter = Reporter::new(cli.color.should_color(), cli.verbosity.is_quiet());
    let registry = PresetRegistry::with_builtins();

    let Some(preset) = registry.config(&args.preset) else {
        return Err(CliError::invalid_argument(format!(
            "unknown preset '{}' (available: {})",
            args.preset,
            registry.list().join(", ")
        )));
    };

    let config_path = cli.cwd.join(CONFIG_FILE);
    if config_path.exists() && !args.force {
        return Err(CliError::config(format!(
            "{CONFIG_FILE} already exists (use --force to overwrite)"
        )));
    }

    let json = serde_json::to_string_pretty(preset)
        .map_err(|e| CliError::config(format!("failed to serialize configuration: {e}")))?;
    fs::write(&config_path, json + "\n")?;
    reporter.success(&format!(
        "Wrote {CONFIG_FILE} from the '{}' preset",
        args.preset
    ));

    let test_dir = preset.test_dir.as_deref().unwrap_or("tests");
    let test_dir_path = cli.cwd.join(test_dir);
    if !test_dir_path.exists() {
        fs::create_dir_all(&test_dir_path)?;
        fs::write(test_dir_path.join("example.test.ts"), EXAMPLE_TEST)?;
        reporter.success(&format!("Created {test_dir}/example.test.ts"));
    }

    reporter.info("Next: install your test runner and run `ensayo run`");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(preset: &str, force: bool) -> InitArgs {
        InitArgs {
            preset: preset.to_string(),
            force,
        }
    }

    #[test]
    fn test_init_writes_config_and_example() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        execute_init(&cli, &args("base", false)).unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        let config: ensayo::TestingConfig = serde_json::from_str(&written).unwrap();
        assert_eq!(config.framework.as_deref(), Some("vitest"));
        assert!(dir.path().join("tests/example.test.ts").exists());
    }

    #[test]
    fn test_init_unknown_preset_lists_available() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let err = execute_init(&cli, &args("angular", false)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("angular"));
        assert!(message.contains("base"));
        assert!(message.contains("vue"));
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{}").unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        let err = execute_init(&cli, &args("base", false)).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{}").unwrap();
        let cli = CliConfig::new().with_cwd(dir.path());
        execute_init(&cli, &args("react", true)).unwrap();
        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.contains("IS_REACT_ACT_ENVIRONMENT"));
    }
}
