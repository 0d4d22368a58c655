//! # Order Group Projection
//!
//! Flattens a parsed descriptor into one sequence of display identifiers per
//! `[[order]]` group. Two policies can shrink the result:
//!
//! - **required-only** drops every reference marked `optional = true`.
//! - **unique-only** drops every identifier that was already emitted, anywhere
//!   earlier in the projection. The "seen" set spans all groups, so a
//!   buildpack listed in group 1 disappears from group 2 onwards, and a
//!   repeat inside a single group is dropped as well.
//!
//! Filtering runs before dedup tracking: a reference dropped by the
//! required-only policy is never recorded as seen.

use crate::descriptor::BuildpackDescriptor;
use crate::identifier::normalize;
use log::{debug, warn};
use std::collections::HashSet;

/// One order group as display identifiers, in evaluation order.
pub type OrderGroup = Vec<String>;

/// Policies applied while projecting a descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Drop references marked optional.
    pub required_only: bool,
    /// Drop identifiers already emitted earlier in the projection.
    pub unique_only: bool,
    /// Append `@<version>` to every identifier.
    pub with_version: bool,
}

/// Project every order group of `descriptor` into identifier sequences.
///
/// Group order and element order follow the descriptor. Groups emptied by the
/// policies are kept as empty sequences so group numbering stays stable.
pub fn project(descriptor: &BuildpackDescriptor, options: ProjectionOptions) -> Vec<OrderGroup> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::with_capacity(descriptor.order.len());

    for (index, order) in descriptor.order.iter().enumerate() {
        let mut ids = Vec::with_capacity(order.group.len());

        for reference in &order.group {
            if options.required_only && !reference.is_required() {
                debug!(
                    "Order group {}: skipping optional buildpack {}",
                    index + 1,
                    reference.id
                );
                continue;
            }

            let id = normalize(reference, options.with_version);

            if options.unique_only && !seen.insert(id.clone()) {
                debug!("Order group {}: skipping repeated {}", index + 1, id);
                continue;
            }

            ids.push(id);
        }

        if ids.is_empty() && !order.group.is_empty() {
            warn!(
                "Order group {} has no buildpacks left after filtering",
                index + 1
            );
        }

        result.push(ids);
    }

    result
}
