//! Structured summary output.
//!
//! The same information as the annotated list, as a JSON document:
//!
//! ```json
//! {
//!   "beginning": ["ca-certificates"],
//!   "ending": ["procfile"],
//!   "order_groups": [["node-engine"], ["npm"]]
//! }
//! ```
//!
//! Keys appear in declaration order and the document is pretty-printed with
//! two-space indentation.

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::error::{Error, Result};

/// JSON form of the annotated list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Buildpacks every group starts with.
    pub beginning: Vec<String>,
    /// Buildpacks every group ends with, in forward order.
    pub ending: Vec<String>,
    /// Per group, the buildpacks not covered by `beginning` or `ending`.
    pub order_groups: Vec<Vec<String>>,
}

impl From<&Analysis> for Summary {
    fn from(analysis: &Analysis) -> Self {
        Self {
            beginning: analysis.beginning().to_vec(),
            ending: analysis.ending().to_vec(),
            order_groups: analysis
                .groups()
                .iter()
                .map(|group| {
                    analysis
                        .distinct(group)
                        .into_iter()
                        .map(|(_, id)| id.to_string())
                        .collect()
                })
                .collect(),
        }
    }
}

/// Render the summary as pretty-printed JSON, newline terminated.
pub fn render(analysis: &Analysis) -> Result<String> {
    let summary = Summary::from(analysis);
    let mut json = serde_json::to_string_pretty(&summary).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}
