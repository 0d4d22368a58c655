//! # Error Suggestions
//!
//! Helper functions for generating error messages with hints. Errors should
//! tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use buildpack_order::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Descriptor not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::descriptor_not_found(path));
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for when the descriptor file is not found.
pub fn descriptor_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Buildpack descriptor not found: {path}\n\n\
         hint: Run from the directory containing the meta-buildpack's buildpack.toml\n\
         hint: Use --buildpack-toml-path to specify a different path\n\
         hint: Set the BUILDPACK_TOML_PATH environment variable",
        path = path.display()
    )
}

/// Generate an error for a descriptor that could not be loaded.
pub fn descriptor_unreadable(path: &Path, error: &Error) -> anyhow::Error {
    let hint = match error {
        Error::Toml(_) => {
            "hint: Check the file is valid TOML and that [[order.group]] fields have the \
             expected types (id and version are strings, optional is a boolean)"
        }
        _ => "hint: Check the file exists and is readable",
    };

    anyhow::anyhow!(
        "Could not decode buildpack descriptor {path}\n\
         error: {error}\n\n\
         {hint}",
        path = path.display()
    )
}

/// Generate an error for a descriptor without order groups.
pub fn no_order_groups(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No order groups found in {path}\n\n\
         hint: Only meta-buildpacks declare [[order]] groups\n\
         hint: Point --buildpack-toml-path at a meta-buildpack descriptor",
        path = path.display()
    )
}
