//! Annotated list output.
//!
//! The common beginning and ending are printed once; each order group then
//! lists only the buildpacks not covered by them, with their 1-based position
//! in the group:
//!
//! ```text
//! Common beginning buildpacks
//! - ca-certificates
//! Order Group #1, with 3 buildpacks
//! - (#02): node-engine
//! Order Group #2, with 3 buildpacks
//! - (#02): npm
//! Common ending buildpacks
//! - procfile
//! ```

use std::fmt::Write;

use crate::analysis::Analysis;
use crate::output::{heading, OutputConfig};

/// Render the annotated list view.
pub fn render(analysis: &Analysis, config: &OutputConfig) -> String {
    let mut out = String::new();

    let beginning_title = if analysis.beginning().is_empty() {
        "No common beginning buildpacks found"
    } else {
        "Common beginning buildpacks"
    };
    push_section(&mut out, config, beginning_title, analysis.beginning());

    for (i, group) in analysis.groups().iter().enumerate() {
        let title = format!("Order Group #{}, with {} buildpacks", i + 1, group.len());
        let _ = writeln!(out, "{}", heading(config, &title));

        for (j, id) in analysis.distinct(group) {
            let _ = writeln!(out, "- (#{:02}): {}", j + 1, id);
        }
    }

    let ending_title = if analysis.ending().is_empty() {
        "No common ending buildpacks found"
    } else {
        "Common ending buildpacks"
    };
    push_section(&mut out, config, ending_title, analysis.ending());

    out
}

fn push_section(out: &mut String, config: &OutputConfig, title: &str, ids: &[String]) {
    let _ = writeln!(out, "{}", heading(config, title));
    for id in ids {
        let _ = writeln!(out, "- {}", id);
    }
}
