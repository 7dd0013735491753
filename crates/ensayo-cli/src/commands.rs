//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ColorChoice;

/// Ensayo: configuration and orchestration for JS test tooling
#[derive(Parser, Debug)]
#[command(name = "ensayo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Project directory to operate in (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run tests through the configured external runners
    Run(RunArgs),

    /// Check coverage against configured thresholds
    Coverage(CoverageArgs),

    /// Initialize a project configuration from a preset
    Init(InitArgs),

    /// Show and validate the resolved configuration
    Config(ConfigArgs),

    /// List available configuration presets
    Presets,
}

/// Color output argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Detect terminal support
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Which suites to run
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestType {
    /// Unit tests only
    Unit,
    /// E2E tests only
    E2e,
    /// Unit then E2E
    #[default]
    All,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Which suites to run
    #[arg(short = 't', long = "type", value_enum, default_value = "all")]
    pub test_type: TestType,

    /// Apply a named preset under the user configuration
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Watch mode - rerun on changes
    #[arg(short, long)]
    pub watch: bool,

    /// Collect coverage
    #[arg(short, long)]
    pub coverage: bool,

    /// Update snapshots
    #[arg(short, long)]
    pub update_snapshot: bool,

    /// Exit on first failure
    #[arg(long)]
    pub bail: bool,

    /// Maximum concurrent test files
    #[arg(long)]
    pub max_concurrency: Option<u32>,

    /// Filter tests by name pattern
    #[arg(long)]
    pub test_name_pattern: Option<String>,

    /// Filter tests by file path pattern
    #[arg(long)]
    pub test_path_pattern: Option<String>,
}

/// Arguments for the coverage command
#[derive(Parser, Debug)]
pub struct CoverageArgs {
    /// Path to an istanbul-style coverage-summary.json
    /// (defaults to `<reportsDirectory>/coverage-summary.json`)
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Apply a named preset under the user configuration
    #[arg(short, long)]
    pub preset: Option<String>,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Preset to base the configuration on
    #[arg(short, long, default_value = "base")]
    pub preset: String,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print the fully resolved configuration as JSON
    #[arg(long)]
    pub show: bool,

    /// Validate the resolved configuration and report errors and warnings
    #[arg(long)]
    pub validate: bool,

    /// Apply a named preset under the user configuration
    #[arg(short, long)]
    pub preset: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run_defaults() {
        let cli = Cli::try_parse_from(["ensayo", "run"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.test_type, TestType::All);
                assert!(!args.watch);
                assert!(args.preset.is_none());
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parses_run_type() {
        let cli = Cli::try_parse_from(["ensayo", "run", "--type", "unit", "--coverage"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.test_type, TestType::Unit);
                assert!(args.coverage);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["ensayo", "-vv", "--color", "never", "config", "--show"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ensayo"]).is_err());
    }

    #[test]
    fn test_init_preset_default() {
        let cli = Cli::try_parse_from(["ensayo", "init"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.preset, "base");
                assert!(!args.force);
            }
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
    }
}
