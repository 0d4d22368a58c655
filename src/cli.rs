//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use buildpack_order::output::OutputConfig;

use crate::commands;

/// Buildpack Order - Compare the order groups of a meta-buildpack
#[derive(Parser, Debug)]
#[command(name = "buildpack-order")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to execute; without one the descriptor is analyzed
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analyze: commands::analyze::AnalyzeArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.command {
            Some(Commands::Completions(args)) => commands::completions::execute(args),
            None => {
                let output = OutputConfig::from_env_and_flag(&self.color);
                commands::analyze::execute(self.analyze, &output)
            }
        }
    }
}

/// Install the stderr logger at `level`.
fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
