//! # Order Group Analysis
//!
//! Bundles the projected order groups with their common beginning and ending
//! so that every renderer works from the same, once-computed result.

use crate::affix::{common_prefix, common_suffix};
use crate::error::Result;
use crate::projection::OrderGroup;
use log::debug;

/// Projected order groups plus their common beginning and ending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    groups: Vec<OrderGroup>,
    beginning: Vec<String>,
    ending: Vec<String>,
}

impl Analysis {
    /// Analyze a non-empty set of order groups.
    ///
    /// Returns [`crate::error::Error::NoOrderGroups`] when `groups` is empty.
    pub fn new(groups: Vec<OrderGroup>) -> Result<Self> {
        let beginning = common_prefix(&groups)?;
        let ending = common_suffix(&groups)?;
        debug!(
            "{} order group(s): {} common at the beginning, {} at the end",
            groups.len(),
            beginning.len(),
            ending.len()
        );

        Ok(Self {
            groups,
            beginning,
            ending,
        })
    }

    pub fn groups(&self) -> &[OrderGroup] {
        &self.groups
    }

    /// Identifiers every group starts with.
    pub fn beginning(&self) -> &[String] {
        &self.beginning
    }

    /// Identifiers every group ends with, in forward order.
    pub fn ending(&self) -> &[String] {
        &self.ending
    }

    /// Whether position `index` of `group` is already covered by the common
    /// beginning or ending.
    ///
    /// Tail positions are only covered when the identifier actually matches
    /// the ending at the mirrored offset. Positions outside `group` are never shared.
    pub fn is_shared(&self, group: &[String], index: usize) -> bool {
        let Some(id) = group.get(index) else {
            return false;
        };
        if index < self.beginning.len() {
            return true;
        }

        let left_to_go = group.len() - index;
        left_to_go <= self.ending.len() && *id == self.ending[self.ending.len() - left_to_go]
    }

    /// Identifiers of `group` not covered by the common beginning or ending,
    /// paired with their zero-based position.
    pub fn distinct<'a>(&self, group: &'a [String]) -> Vec<(usize, &'a str)> {
        group
            .iter()
            .enumerate()
            .filter(|(j, _)| !self.is_shared(group, *j))
            .map(|(j, id)| (j, id.as_str()))
            .collect()
    }
}
