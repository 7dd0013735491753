//! Presets command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;
use ensayo::{PresetRegistry, TestingConfig};

/// Execute the presets command
pub fn execute_presets(cli: &CliConfig) -> CliResult<()> {
    let reporter = Reporter::new(cli.color.should_color(), cli.verbosity.is_quiet());
    let registry = PresetRegistry::with_builtins();

    reporter.header("Available presets");
    for name in registry.list() {
        if let Some(config) = registry.config(name) {
            println!("  {name:<10} {}", describe(config));
        }
    }
    Ok(())
}

fn describe(config: &TestingConfig) -> String {
    let framework = config.framework.as_deref().unwrap_or("vitest");
    let threshold = config
        .coverage
        .as_ref()
        .and_then(|c| c.threshold)
        .and_then(|t| t.lines);
    match threshold {
        Some(pct) => format!("{framework}, {pct:.0}% line coverage"),
        None => framework.to_string(),
    }
}
