//! # Common Beginning and Ending
//!
//! Finds the longest run of identifiers that every order group starts with,
//! and the longest run every group ends with.
//!
//! The prefix scan uses the first group as the reference and walks it index
//! by index, stopping at the first position where some other group is too
//! short or holds a different identifier. The suffix is computed by reversing
//! every group, running the same prefix scan, and reversing the result back.
//! Both sides therefore share one comparison routine and break ties the same
//! way.
//!
//! An empty set of groups has no reference sequence and is reported as
//! [`Error::NoOrderGroups`].

use crate::error::{Error, Result};

/// Longest sequence every group starts with.
pub fn common_prefix<S: AsRef<[String]>>(groups: &[S]) -> Result<Vec<String>> {
    let (reference, rest) = groups.split_first().ok_or_else(|| Error::NoOrderGroups {
        context: "cannot compute a common beginning without order groups".to_string(),
    })?;
    let reference = reference.as_ref();

    let shared = reference
        .iter()
        .enumerate()
        .take_while(|(i, id)| rest.iter().all(|group| group.as_ref().get(*i) == Some(*id)))
        .count();

    Ok(reference[..shared].to_vec())
}

/// Longest sequence every group ends with, in forward order.
pub fn common_suffix<S: AsRef<[String]>>(groups: &[S]) -> Result<Vec<String>> {
    let mut suffix = common_prefix(&reversed(groups))?;
    suffix.reverse();
    Ok(suffix)
}

/// Copy of every group with its elements in reverse order.
pub fn reversed<S: AsRef<[String]>>(groups: &[S]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| group.as_ref().iter().rev().cloned().collect())
        .collect()
}
