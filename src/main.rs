//! # Buildpack Order CLI
//!
//! This is the binary entry point for the `buildpack-order` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the selected command.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The analysis itself lives in the `buildpack_order` library crate; the
//! binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
