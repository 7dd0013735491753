//! Run command handler
//!
//! Ensayo does not run tests itself: it resolves the configuration and
//! shells out to the configured external runner through `npx`, mapping the
//! merged configuration onto that runner's flags.

use crate::commands::{RunArgs, TestType};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::resolve_config;
use crate::output::Reporter;
use ensayo::{check_warnings, validate_strict, PresetRegistry, TestingConfig};
use std::path::Path;

/// Execute the run command
pub fn execute_run(cli: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let reporter = Reporter::new(cli.color.should_color(), cli.verbosity.is_quiet());

    let spinner = reporter.spinner("Loading configuration...");
    let registry = PresetRegistry::with_builtins();
    let config = resolve_config(cli, &registry, args.preset.as_deref())?;
    spinner.finish_and_clear();

    validate_strict(&config).map_err(CliError::from)?;
    for warning in check_warnings(&config) {
        reporter.warning(&warning);
    }

    if matches!(args.test_type, TestType::Unit | TestType::All) {
        let (program, runner_args) = unit_command(&config, args);
        reporter.info(&format!("Running unit tests ({})", runner_args[0]));
        run_process(&program, &runner_args, &config, &cli.cwd)?;
    }

    if matches!(args.test_type, TestType::E2e | TestType::All) {
        let (program, runner_args) = e2e_command(&config, args);
        reporter.info(&format!("Running E2E tests ({})", runner_args[0]));
        run_process(&program, &runner_args, &config, &cli.cwd)?;
    }

    reporter.success("All requested suites passed");
    Ok(())
}

/// Build the unit runner invocation from the merged configuration.
///
/// Returns `(program, args)`; the first arg is the runner binary name.
#[must_use]
pub fn unit_command(config: &TestingConfig, args: &RunArgs) -> (String, Vec<String>) {
    let framework = config.framework.as_deref().unwrap_or("vitest");
    let unit = config.unit.as_ref();
    let watch = args.watch || config.watch == Some(true);
    let coverage = args.coverage
        || config
            .coverage
            .as_ref()
            .and_then(|c| c.enabled)
            .unwrap_or(false);

    let mut cmd = vec![framework.to_string()];

    if framework == "jest" {
        if watch {
            cmd.push("--watch".to_string());
        }
        if coverage {
            cmd.push("--coverage".to_string());
        }
        if args.bail {
            cmd.push("--bail".to_string());
        }
        if args.update_snapshot {
            cmd.push("--updateSnapshot".to_string());
        }
        if let Some(timeout) = unit.and_then(|u| u.timeout) {
            cmd.push(format!("--testTimeout={timeout}"));
        }
        if let Some(ref pattern) = args.test_name_pattern {
            cmd.push("--testNamePattern".to_string());
            cmd.push(pattern.clone());
        }
        if let Some(ref pattern) = args.test_path_pattern {
            cmd.push("--testPathPattern".to_string());
            cmd.push(pattern.clone());
        }
    } else {
        // vitest runs once with `run`, watches by default otherwise
        if !watch {
            cmd.push("run".to_string());
        }
        if coverage {
            cmd.push("--coverage".to_string());
        }
        if args.bail {
            cmd.push("--bail=1".to_string());
        }
        if args.update_snapshot {
            cmd.push("--update".to_string());
        }
        if let Some(timeout) = unit.and_then(|u| u.timeout) {
            cmd.push(format!("--testTimeout={timeout}"));
        }
        if let Some(max) = args.max_concurrency {
            cmd.push(format!("--maxConcurrency={max}"));
        }
        if let Some(ref pattern) = args.test_name_pattern {
            cmd.push("-t".to_string());
            cmd.push(pattern.clone());
        }
        if let Some(ref pattern) = args.test_path_pattern {
            cmd.push(pattern.clone());
        }
    }

    ("npx".to_string(), cmd)
}

/// Build the E2E runner invocation from the merged configuration.
#[must_use]
pub fn e2e_command(config: &TestingConfig, args: &RunArgs) -> (String, Vec<String>) {
    let e2e = config.e2e.as_ref();
    let framework = e2e
        .and_then(|e| e.framework.as_deref())
        .unwrap_or("playwright");

    let mut cmd = vec![framework.to_string()];

    if framework == "cypress" {
        cmd.push("run".to_string());
        if e2e.and_then(|e| e.headless) == Some(false) {
            cmd.push("--headed".to_string());
        }
        if let Some(browser) = e2e.and_then(|e| e.browsers.as_ref()).and_then(|b| b.first()) {
            cmd.push("--browser".to_string());
            cmd.push(browser.clone());
        }
    } else {
        cmd.push("test".to_string());
        if e2e.and_then(|e| e.headless) == Some(false) {
            cmd.push("--headed".to_string());
        }
        for browser in e2e.and_then(|e| e.browsers.as_ref()).into_iter().flatten() {
            cmd.push(format!("--project={browser}"));
        }
        if let Some(retries) = e2e.and_then(|e| e.retries) {
            cmd.push(format!("--retries={retries}"));
        }
        if let Some(timeout) = e2e.and_then(|e| e.timeout) {
            cmd.push(format!("--timeout={timeout}"));
        }
        if let Some(workers) = config.parallel.as_ref().and_then(|p| p.workers) {
            cmd.push(format!("--workers={workers}"));
        }
        if let Some(shard) = config.parallel.as_ref().and_then(|p| p.shard) {
            cmd.push(format!("--shard={}/{}", shard.current, shard.total));
        }
        if let Some(ref pattern) = args.test_name_pattern {
            cmd.push("--grep".to_string());
            cmd.push(pattern.clone());
        }
    }

    ("npx".to_string(), cmd)
}

fn run_process(
    program: &str,
    args: &[String],
    config: &TestingConfig,
    cwd: &Path,
) -> CliResult<()> {
    let mut command = std::process::Command::new(program);
    command.args(args).current_dir(cwd);
    if let Some(ref env) = config.env {
        command.envs(env);
    }

    let status = command
        .status()
        .map_err(|e| CliError::test_execution(format!("failed to launch {program}: {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(CliError::test_execution(format!(
            "{} exited with {status}",
            args.first().map_or(program, String::as_str)
        )))
    }
}
