//! Coverage command handler

use crate::commands::CoverageArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::handlers::resolve_config;
use crate::output::{format_coverage, format_threshold_failures, Reporter};
use ensayo::{analyze, read_summary, validate_thresholds, PresetRegistry, TestingConfig};
use std::path::PathBuf;

/// Execute the coverage command
pub fn execute_coverage(cli: &CliConfig, args: &CoverageArgs) -> CliResult<()> {
    let reporter = Reporter::new(cli.color.should_color(), cli.verbosity.is_quiet());

    let registry = PresetRegistry::with_builtins();
    let config = resolve_config(cli, &registry, args.preset.as_deref())?;

    let path = args
        .summary
        .clone()
        .unwrap_or_else(|| summary_path(cli, &config));
    if !path.exists() {
        return Err(CliError::config(format!(
            "coverage summary not found at {} (run tests with --coverage first)",
            path.display()
        )));
    }

    let summary = read_summary(&path)?;
    println!("{}", format_coverage(&summary, cli.color.should_color()));

    let analysis = analyze(&summary);
    reporter.info(&format!(
        "Overall score: {:.1}% (grade {})",
        analysis.score, analysis.grade
    ));
    for recommendation in &analysis.recommendations {
        reporter.info(recommendation);
    }

    let threshold = config.coverage.as_ref().and_then(|c| c.threshold.as_ref());
    let Some(threshold) = threshold else {
        reporter.warning("No coverage thresholds configured; nothing to check");
        return Ok(());
    };

    let result = validate_thresholds(&summary, threshold);
    if result.passed {
        reporter.success("All coverage thresholds met");
        Ok(())
    } else {
        reporter.failure("Coverage thresholds not met:");
        println!("{}", format_threshold_failures(&result));
        Err(CliError::threshold_not_met(format!(
            "{} metric(s) below threshold",
            result.failures.len()
        )))
    }
}

/// Default summary location: `<cwd>/<reportsDirectory>/coverage-summary.json`.
fn summary_path(cli: &CliConfig, config: &TestingConfig) -> PathBuf {
    let reports_dir = config
        .coverage
        .as_ref()
        .and_then(|c| c.reports_directory.as_deref())
        .unwrap_or("coverage");
    cli.cwd.join(reports_dir).join("coverage-summary.json")
}
