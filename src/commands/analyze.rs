//! # Analyze Command Implementation
//!
//! This module implements the default action of `buildpack-order`: load a
//! meta-buildpack descriptor, project its order groups, find what all groups
//! have in common and print the result in the selected format.
//!
//! ## Functionality
//!
//! - **Output formats**: `table`, `short` (default), `short-json` and `hist`
//! - **Filtering**: `--required-only` drops optional buildpacks,
//!   `--unique-only` drops buildpacks already listed by an earlier group
//! - **Versions**: `--with-version` shows `id@version`
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use log::info;
use std::path::PathBuf;

use buildpack_order::analysis::Analysis;
use buildpack_order::defaults::DEFAULT_DESCRIPTOR_PATH;
use buildpack_order::descriptor;
use buildpack_order::error::Error;
use buildpack_order::output::OutputConfig;
use buildpack_order::projection::{project, ProjectionOptions};
use buildpack_order::render::{render, OutputFormat};
use buildpack_order::suggestions;

/// Analyze the order groups of a meta-buildpack descriptor
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Full path to a meta-buildpack's buildpack.toml file.
    #[arg(
        long,
        value_name = "FILE",
        default_value = DEFAULT_DESCRIPTOR_PATH,
        env = "BUILDPACK_TOML_PATH"
    )]
    pub buildpack_toml_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "short")]
    pub output_format: OutputFormat,

    /// Only print buildpack ids not already printed for an earlier group.
    #[arg(long)]
    pub unique_only: bool,

    /// Only print buildpacks that are not marked optional.
    #[arg(long)]
    pub required_only: bool,

    /// Print the buildpack version as well as the id.
    #[arg(long)]
    pub with_version: bool,
}

impl AnalyzeArgs {
    fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            required_only: self.required_only,
            unique_only: self.unique_only,
            with_version: self.with_version,
        }
    }
}

/// Execute the analysis.
///
/// The report is rendered completely before anything is written, so a
/// failure never leaves partial output on stdout.
pub fn execute(args: AnalyzeArgs, output: &OutputConfig) -> Result<()> {
    let path = &args.buildpack_toml_path;
    info!("Will look in file {}", path.display());

    if !path.exists() {
        return Err(suggestions::descriptor_not_found(path));
    }

    let descriptor = descriptor::from_file(path)
        .map_err(|e| suggestions::descriptor_unreadable(path, &e))?;

    let groups = project(&descriptor, args.projection_options());
    let analysis = Analysis::new(groups).map_err(|e| match e {
        Error::NoOrderGroups { .. } => suggestions::no_order_groups(path),
        other => anyhow::Error::new(other),
    })?;

    let report = render(args.output_format, &analysis, output)?;
    print!("{}", report);

    Ok(())
}
