//! Histogram output: how many times each buildpack appears across all order
//! groups.
//!
//! ```text
//! Histogram:
//! 3: ca-certificates, procfile
//! 1: yarn, npm
//! ```
//!
//! Counts cover every projected identifier; the common beginning and ending
//! are not excluded. Within a line, buildpacks keep the order in which they
//! were first counted.

use std::collections::HashMap;
use std::fmt::Write;

use crate::analysis::Analysis;
use crate::output::{heading, OutputConfig};
use crate::projection::OrderGroup;

/// Occurrence count of every identifier, in first-encountered order.
pub fn count(groups: &[OrderGroup]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for id in groups.iter().flatten() {
        match index.get(id.as_str()).copied() {
            Some(slot) => counts[slot].1 += 1,
            None => {
                index.insert(id.as_str(), counts.len());
                counts.push((id.as_str(), 1));
            }
        }
    }

    counts
}

/// Identifiers grouped by count, highest count first.
///
/// Empty buckets are omitted.
pub fn buckets(groups: &[OrderGroup]) -> Vec<(usize, Vec<&str>)> {
    let counts = count(groups);
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut by_count: Vec<Vec<&str>> = vec![Vec::new(); max + 1];
    for (id, n) in counts {
        by_count[n].push(id);
    }

    by_count
        .into_iter()
        .enumerate()
        .rev()
        .filter(|(_, ids)| !ids.is_empty())
        .collect()
}

/// Render the histogram view.
pub fn render(analysis: &Analysis, config: &OutputConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(config, "Histogram:"));

    for (n, ids) in buckets(analysis.groups()) {
        let _ = writeln!(out, "{}: {}", n, ids.join(", "));
    }

    out
}
