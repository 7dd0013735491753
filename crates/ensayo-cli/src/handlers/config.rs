//! Config command handler

use crate::commands::ConfigArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::resolve_config;
use crate::output::Reporter;
use ensayo::{check_warnings, validate, PresetRegistry};

/// Execute the config command
pub fn execute_config(cli: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let reporter = Reporter::new(cli.color.should_color(), cli.verbosity.is_quiet());

    let registry = PresetRegistry::with_builtins();
    let config = resolve_config(cli, &registry, args.preset.as_deref())?;

    // With neither flag, default to showing the resolved tree.
    let show = args.show || !args.validate;

    if show {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::config(format!("failed to serialize configuration: {e}")))?;
        println!("{json}");
    }

    if args.validate {
        let errors = validate(&config);
        for warning in check_warnings(&config) {
            reporter.warning(&warning);
        }
        if errors.is_empty() {
            reporter.success("Configuration is valid");
        } else {
            for error in &errors {
                reporter.failure(&error.to_string());
            }
            return Err(CliError::config(format!(
                "{} validation error(s)",
                errors.len()
            )));
        }
    }

    Ok(())
}
