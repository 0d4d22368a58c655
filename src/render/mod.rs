//! # Report Rendering
//!
//! Turns an [`Analysis`] into text. Each output format lives in its own
//! module and renders into a `String`, so a failure never leaves partial
//! output on stdout.
//!
//! | Format       | Module        | Shows                                              |
//! |--------------|---------------|----------------------------------------------------|
//! | `table`      | [`table`]     | every group, one aligned column per position       |
//! | `short`      | [`short`]     | common beginning/ending once, the rest per group   |
//! | `short-json` | [`summary`]   | the `short` view as a JSON document                |
//! | `hist`       | [`histogram`] | how many groups list each buildpack                |

pub mod histogram;
pub mod short;
pub mod summary;
pub mod table;

use clap::ValueEnum;

use crate::analysis::Analysis;
use crate::error::Result;
use crate::output::OutputConfig;

/// Output formats understood by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Aligned table of every order group
    Table,
    /// Common beginning and ending, plus what differs per group
    #[default]
    Short,
    /// The short view as JSON
    ShortJson,
    /// Histogram of how often each buildpack appears
    Hist,
}

/// Render `analysis` in the requested format.
pub fn render(format: OutputFormat, analysis: &Analysis, config: &OutputConfig) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render(analysis, config)),
        OutputFormat::Short => Ok(short::render(analysis, config)),
        OutputFormat::ShortJson => summary::render(analysis),
        OutputFormat::Hist => Ok(histogram::render(analysis, config)),
    }
}
