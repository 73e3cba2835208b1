//! radix CLI: argument parsing, configuration and command handlers
pub mod cli;
pub mod commands;
pub mod config;

use cli::{Cli, Command};
use commands::Outcome;
use config::CliConfig;

/// Dispatch a parsed command line.
pub fn run(cli: &Cli, config: &CliConfig) -> anyhow::Result<Outcome> {
    match &cli.command {
        Command::Convert(args) => commands::run_convert(args, config),
        Command::All(args) => commands::run_all(args),
        Command::Systems => commands::run_systems(),
    }
}
