//! Ensayo CLI: configuration and orchestration for JS test tooling
//!
//! ## Usage
//!
//! ```bash
//! ensayo run                      # Run all configured suites
//! ensayo run --type unit          # Unit tests only
//! ensayo coverage                 # Check coverage thresholds
//! ensayo init --preset vue        # Write a starter configuration
//! ensayo config --validate        # Validate the resolved configuration
//! ```

use clap::Parser;
use ensayo_cli::{
    handlers::{
        config::execute_config, coverage::execute_coverage, init::execute_init,
        presets::execute_presets, run::execute_run,
    },
    Cli, CliConfig, CliResult, Commands, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build runtime settings from CLI args
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match cli.command {
        Commands::Run(args) => execute_run(&config, &args),
        Commands::Coverage(args) => execute_coverage(&config, &args),
        Commands::Init(args) => execute_init(&config, &args),
        Commands::Config(args) => execute_config(&config, &args),
        Commands::Presets => execute_presets(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let cwd = cli
        .cwd
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
        .with_cwd(cwd)
}

fn init_tracing(verbosity: Verbosity) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
