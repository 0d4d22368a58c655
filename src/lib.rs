//! # Buildpack Order Library
//!
//! This library analyzes the `[[order]]` groups of a meta-buildpack
//! descriptor (`buildpack.toml`) and renders them in formats that make it easy
//! to compare groups with each other. It is used by the `buildpack-order`
//! command-line tool but can be driven directly.
//!
//! ## Quick Example
//!
//! ```
//! use buildpack_order::analysis::Analysis;
//! use buildpack_order::descriptor;
//! use buildpack_order::projection::{project, ProjectionOptions};
//!
//! let toml = r#"
//! [[order]]
//!   [[order.group]]
//!     id = "paketo-buildpacks/ca-certificates"
//!   [[order.group]]
//!     id = "paketo-buildpacks/node-engine"
//!
//! [[order]]
//!   [[order.group]]
//!     id = "paketo-buildpacks/ca-certificates"
//!   [[order.group]]
//!     id = "paketo-buildpacks/yarn"
//! "#;
//!
//! let descriptor = descriptor::parse(toml).unwrap();
//! let groups = project(&descriptor, ProjectionOptions::default());
//! let analysis = Analysis::new(groups).unwrap();
//!
//! assert_eq!(analysis.beginning(), ["ca-certificates"]);
//! assert!(analysis.ending().is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Descriptor (`descriptor`)**: serde model of `buildpack.toml`.
//! - **Identifiers (`identifier`)**: turn a buildpack reference into the string
//!   that is displayed and compared.
//! - **Projection (`projection`)**: flatten the descriptor into order groups of
//!   identifiers, applying the required-only and unique-only policies.
//! - **Affixes (`affix`)**: the longest runs of buildpacks every group starts
//!   and ends with.
//! - **Rendering (`render`)**: table, annotated list, JSON summary and
//!   histogram output.
//!
//! ## Execution Flow
//!
//! 1.  **Parse**: read the descriptor into a `BuildpackDescriptor`.
//! 2.  **Project**: produce one identifier sequence per order group.
//! 3.  **Analyze**: compute the common beginning and ending once.
//! 4.  **Render**: format the analysis in the selected output format.

pub mod affix;
pub mod analysis;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod output;
pub mod projection;
pub mod render;
pub mod suggestions;

#[cfg(test)]
mod affix_proptest;
