//! Default values for buildpack-order.
//!
//! This module provides centralized default values used across the analysis
//! pipeline and the command line, ensuring consistency and avoiding
//! duplication.

/// Descriptor path used when `--buildpack-toml-path` is not given.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "./buildpack.toml";

/// Namespace stripped from buildpack ids before display.
pub const NAMESPACE_PREFIX: &str = "paketo-buildpacks/";

/// Version shown for references that do not pin one.
pub const UNKNOWN_VERSION: &str = "<UNKNOWN-VERSION>";
