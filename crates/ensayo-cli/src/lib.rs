//! Ensayo CLI: command-line front end for the ensayo configuration core
//!
//! The binary resolves a project's testing configuration (defaults, presets,
//! user config), validates it, and orchestrates the external JS test runners.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Reporter;
