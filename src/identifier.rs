//! Display identifiers for buildpack references.
//!
//! Identifiers are what the analysis compares and prints. The well-known
//! `paketo-buildpacks/` namespace is dropped to keep output short, and the
//! version can be appended so that groups pinning different versions of the
//! same buildpack no longer compare equal.

use crate::defaults::{NAMESPACE_PREFIX, UNKNOWN_VERSION};
use crate::descriptor::BuildpackRef;

/// Normalize a reference into its display identifier.
///
/// Never fails: ids outside the namespace are returned unchanged, and a
/// missing or empty version is shown as `<UNKNOWN-VERSION>`.
pub fn normalize(reference: &BuildpackRef, with_version: bool) -> String {
    let id = reference
        .id
        .strip_prefix(NAMESPACE_PREFIX)
        .unwrap_or(&reference.id);

    if !with_version {
        return id.to_string();
    }

    let version = reference
        .version
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_VERSION);

    format!("{}@{}", id, version)
}
