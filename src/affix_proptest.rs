//! Property-based tests for common beginning/ending discovery and projection.
//!
//! These tests use proptest to generate random order groups and verify that
//! invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::affix::{common_prefix, common_suffix, reversed};
    use crate::descriptor::{BuildpackDescriptor, BuildpackRef};
    use crate::projection::{project, ProjectionOptions};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Small alphabet so that groups share identifiers often.
    fn id() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(String::from)
    }

    fn group() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(id(), 0..6)
    }

    fn groups() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(group(), 1..5)
    }

    // ============================================================================
    // common_prefix / common_suffix property tests
    // ============================================================================

    proptest! {
        /// Property: the prefix is a leading subsequence of every group
        #[test]
        fn prefix_leads_every_group(set in groups()) {
            let prefix = common_prefix(&set).unwrap();
            for group in &set {
                prop_assert!(group.starts_with(&prefix));
            }
        }

        /// Property: the prefix cannot be extended by one more element
        #[test]
        fn prefix_is_longest(set in groups()) {
            let prefix = common_prefix(&set).unwrap();
            let k = prefix.len();
            if let Some(next) = set[0].get(k) {
                prop_assert!(set.iter().any(|group| group.get(k) != Some(next)));
            }
        }

        /// Property: the suffix is a trailing subsequence of every group
        #[test]
        fn suffix_trails_every_group(set in groups()) {
            let suffix = common_suffix(&set).unwrap();
            for group in &set {
                prop_assert!(group.ends_with(&suffix));
            }
        }

        /// Property: the suffix cannot be extended by one more element
        #[test]
        fn suffix_is_longest(set in groups()) {
            let suffix = common_suffix(&set).unwrap();
            let k = suffix.len();
            let tails = reversed(&set);
            if let Some(next) = tails[0].get(k) {
                prop_assert!(tails.iter().any(|group| group.get(k) != Some(next)));
            }
        }

        /// Property: repeating one group yields that group on both sides
        #[test]
        fn identical_groups_are_fully_common(g in group(), n in 1usize..5) {
            let set = vec![g.clone(); n];
            prop_assert_eq!(common_prefix(&set).unwrap(), g.clone());
            prop_assert_eq!(common_suffix(&set).unwrap(), g);
        }

        /// Property: the suffix of a set is the reversed prefix of the reversed set
        #[test]
        fn suffix_mirrors_prefix(set in groups()) {
            let mut expected = common_prefix(&reversed(&set)).unwrap();
            expected.reverse();
            prop_assert_eq!(common_suffix(&set).unwrap(), expected);
        }
    }

    // ============================================================================
    // projection property tests
    // ============================================================================

    fn descriptor() -> impl Strategy<Value = BuildpackDescriptor> {
        let reference = (id(), any::<bool>()).prop_map(|(id, optional)| BuildpackRef {
            id,
            version: None,
            optional,
        });
        prop::collection::vec(prop::collection::vec(reference, 0..6), 0..5)
            .prop_map(BuildpackDescriptor::from_groups)
    }

    proptest! {
        /// Property: unique-only never emits an identifier twice
        #[test]
        fn unique_only_emits_each_id_once(d in descriptor()) {
            let options = ProjectionOptions { unique_only: true, ..ProjectionOptions::default() };
            let projected = project(&d, options);
            let mut seen = HashSet::new();
            for id in projected.iter().flatten() {
                prop_assert!(seen.insert(id.clone()), "{} emitted twice", id);
            }
        }

        /// Property: required-only output matches the required references exactly
        #[test]
        fn required_only_keeps_exactly_required(d in descriptor()) {
            let options = ProjectionOptions { required_only: true, ..ProjectionOptions::default() };
            let projected = project(&d, options);
            prop_assert_eq!(projected.len(), d.order.len());
            for (order, ids) in d.order.iter().zip(&projected) {
                let required: Vec<&str> = order
                    .group
                    .iter()
                    .filter(|r| r.is_required())
                    .map(|r| r.id.as_str())
                    .collect();
                prop_assert_eq!(ids, &required);
            }
        }

        /// Property: projection without policies keeps every reference
        #[test]
        fn plain_projection_keeps_shape(d in descriptor()) {
            let projected = project(&d, ProjectionOptions::default());
            let shape: Vec<usize> = projected.iter().map(Vec::len).collect();
            let expected: Vec<usize> = d.order.iter().map(|o| o.group.len()).collect();
            prop_assert_eq!(shape, expected);
        }
    }
}
