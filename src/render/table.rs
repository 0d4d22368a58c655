//! Table output: every order group on one line, positions aligned in columns.
//!
//! ```text
//! Order Group 1: ca-certificates | node-engine | yarn
//! Order Group 2: ca-certificates | node-engine | npm-install
//! ```
//!
//! The first column follows the label after a single space; later columns are
//! separated by `" | "`. Nothing is suppressed, not even the common beginning
//! or ending.

use std::fmt::Write;

use crate::analysis::Analysis;
use crate::output::{heading, OutputConfig};
use crate::projection::OrderGroup;

/// Render the table view.
pub fn render(analysis: &Analysis, config: &OutputConfig) -> String {
    let widths = column_widths(analysis.groups());
    let mut out = String::new();

    for (i, group) in analysis.groups().iter().enumerate() {
        out.push_str(&heading(config, &format!("Order Group {}:", i + 1)));

        for (j, id) in group.iter().enumerate() {
            let separator = if j == 0 { " " } else { " | " };
            let _ = write!(out, "{}{:<width$}", separator, id, width = widths[j]);
        }
        out.push('\n');
    }

    out
}

/// Widest identifier, in characters, at each position across all groups.
pub fn column_widths(groups: &[OrderGroup]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();

    for group in groups {
        if widths.len() < group.len() {
            widths.resize(group.len(), 0);
        }
        for (j, id) in group.iter().enumerate() {
            widths[j] = widths[j].max(id.chars().count());
        }
    }

    widths
}
