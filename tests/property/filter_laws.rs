//! Laws of the record filter pipeline.

use meikan::{filter_records, FacetSelection, FilterGroup};
use proptest::prelude::*;
use std::collections::HashSet;

use crate::common::indices;
use crate::strategies::{group, records, selection, tag, tags};

proptest! {
    #[test]
    fn filtering_is_idempotent(
        records in records(),
        tags in tags(),
        selection in selection(),
        groups in prop::collection::vec(group(), 0..3),
    ) {
        let first = indices(&filter_records(&records, &tags, &selection, &groups));
        let second = indices(&filter_records(&records, &tags, &selection, &groups));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adding_a_tag_never_grows_results(
        records in records(),
        tags in tags(),
        extra in tag(),
        selection in selection(),
    ) {
        let before: HashSet<&str> = indices(&filter_records(&records, &tags, &selection, &[]))
            .into_iter()
            .collect();
        let mut narrowed = tags.clone();
        narrowed.push(extra);
        for id in indices(&filter_records(&records, &narrowed, &selection, &[])) {
            prop_assert!(before.contains(id));
        }
    }

    #[test]
    fn groups_only_narrow_the_ungrouped_result(
        records in records(),
        tags in tags(),
        selection in selection(),
        groups in prop::collection::vec(group(), 1..4),
    ) {
        let ungrouped: HashSet<&str> = indices(&filter_records(&records, &tags, &selection, &[]))
            .into_iter()
            .collect();
        for id in indices(&filter_records(&records, &tags, &selection, &groups)) {
            prop_assert!(ungrouped.contains(id));
        }
    }

    #[test]
    fn adding_a_group_never_shrinks_grouped_results(
        records in records(),
        groups in prop::collection::vec(group(), 1..3),
        extra in group(),
    ) {
        prop_assume!(groups.iter().any(|g| !g.is_empty()));
        let selection = FacetSelection::default();
        let before = indices(&filter_records(&records, &[], &selection, &groups));
        let mut more = groups.clone();
        more.push(extra);
        let after: HashSet<&str> = indices(&filter_records(&records, &[], &selection, &more))
            .into_iter()
            .collect();
        for id in before {
            prop_assert!(after.contains(id));
        }
    }

    #[test]
    fn blank_groups_change_nothing(
        records in records(),
        tags in tags(),
        selection in selection(),
        blanks in 1usize..4,
    ) {
        let groups = vec![FilterGroup::default(); blanks];
        prop_assert_eq!(
            indices(&filter_records(&records, &tags, &selection, &[])),
            indices(&filter_records(&records, &tags, &selection, &groups))
        );
    }

    #[test]
    fn results_keep_input_order(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        let positions: Vec<usize> = filter_records(&records, &tags, &selection, &[])
            .iter()
            .map(|r| records.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
