//! # Buildpack Descriptor Model
//!
//! This module defines the subset of `buildpack.toml` that the analysis needs,
//! as well as the logic for parsing it. A meta-buildpack descriptor looks like
//! this:
//!
//! ```toml
//! api = "0.7"
//!
//! [buildpack]
//!   id = "paketo-buildpacks/nodejs"
//!   version = "1.2.3"
//!
//! [[order]]
//!   [[order.group]]
//!     id = "paketo-buildpacks/ca-certificates"
//!     optional = true
//!     version = "3.6.3"
//!   [[order.group]]
//!     id = "paketo-buildpacks/node-engine"
//!     version = "1.2.0"
//! ```
//!
//! Keys that the analysis does not use (stacks, metadata, targets) are
//! ignored rather than rejected.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level `buildpack.toml` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildpackDescriptor {
    /// Buildpack API version declared by the descriptor.
    #[serde(default)]
    pub api: Option<String>,
    /// Identity of the meta-buildpack itself.
    #[serde(default)]
    pub buildpack: BuildpackInfo,
    /// Order groups, in declaration order.
    #[serde(default)]
    pub order: Vec<Order>,
}

/// The `[buildpack]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildpackInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl BuildpackInfo {
    /// `id (name) version`, leaving out the parts that are not declared.
    pub fn label(&self) -> String {
        let mut label = self.id.clone();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            label.push_str(&format!(" ({})", name));
        }
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            label.push_str(&format!(" {}", version));
        }
        label
    }
}

/// One `[[order]]` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Buildpack references in evaluation order.
    #[serde(default)]
    pub group: Vec<BuildpackRef>,
}

/// One `[[order.group]]` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackRef {
    /// The referenced buildpack id, e.g. `paketo-buildpacks/node-engine`.
    /// A missing id is read as empty and shown as such.
    #[serde(default)]
    pub id: String,
    /// Pinned version, if any.
    #[serde(default)]
    pub version: Option<String>,
    /// Whether detection may skip this buildpack.
    #[serde(default)]
    pub optional: bool,
}

impl BuildpackRef {
    /// Create a required, unversioned reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
            optional: false,
        }
    }

    /// Set the pinned version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Mark the reference as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// True unless the reference is marked optional.
    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

impl BuildpackDescriptor {
    /// Build a descriptor directly from order groups.
    pub fn from_groups(groups: Vec<Vec<BuildpackRef>>) -> Self {
        Self {
            order: groups.into_iter().map(|group| Order { group }).collect(),
            ..Self::default()
        }
    }
}

/// Parse a descriptor from TOML text
pub fn parse(toml_content: &str) -> Result<BuildpackDescriptor> {
    let descriptor: BuildpackDescriptor = toml::from_str(toml_content)?;
    debug!(
        "Parsed descriptor for {} with {} order group(s)",
        descriptor.buildpack.label(),
        descriptor.order.len()
    );
    Ok(descriptor)
}

/// Parse a descriptor from a `buildpack.toml` path
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BuildpackDescriptor> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
