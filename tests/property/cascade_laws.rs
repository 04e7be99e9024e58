//! Laws of the cascading option lists and counts.

use meikan::{
    compute_facet_counts, filter_records, get_available_filter_options, get_media_counts,
    get_option_counts, get_period_counts, Catalog, Facet, MediaFilter,
};
use proptest::prelude::*;

use crate::strategies::{records, selection, tags, SCHOOLS, SMITHS};

const CASCADING: [Facet; 4] = [Facet::School, Facet::Smith, Facet::Type, Facet::Province];

proptest! {
    #[test]
    fn own_selection_never_narrows_own_options(
        records in records(),
        tags in tags(),
        selection in selection(),
        school in prop::sample::select(SCHOOLS),
        smith in prop::sample::select(SMITHS),
    ) {
        let before = get_available_filter_options(&records, &selection, &tags);

        let school_changed = selection.clone().with(Facet::School, school);
        let after = get_available_filter_options(&records, &school_changed, &tags);
        prop_assert_eq!(&before.schools, &after.schools);

        let smith_changed = selection.clone().with(Facet::Smith, smith);
        let after = get_available_filter_options(&records, &smith_changed, &tags);
        prop_assert_eq!(&before.smiths, &after.smiths);
    }

    #[test]
    fn selected_value_stays_listed(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        let options = get_available_filter_options(&records, &selection, &tags);
        for facet in CASCADING {
            for value in options.for_facet(facet) {
                let picked = selection.clone().with(facet, value.clone());
                let again = get_available_filter_options(&records, &picked, &tags);
                prop_assert!(again.for_facet(facet).contains(value));
            }
        }
    }

    #[test]
    fn option_counts_agree_with_filtering(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        for facet in CASCADING {
            for (value, count) in get_option_counts(&records, &selection, &tags, facet) {
                let picked = selection.clone().with(facet, value);
                prop_assert_eq!(filter_records(&records, &tags, &picked, &[]).len(), count);
            }
        }
    }

    #[test]
    fn period_counts_agree_with_filtering(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        for (era, count) in get_period_counts(&records, &selection, &tags) {
            let mut picked = selection.clone();
            picked.periods = vec![era];
            prop_assert_eq!(filter_records(&records, &tags, &picked, &[]).len(), count);
        }
    }

    #[test]
    fn media_counts_partition_the_unfiltered_media_result(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        let counts = get_media_counts(&records, &selection, &tags);
        let mut any = selection.clone();
        any.has_media = MediaFilter::Any;
        let total = filter_records(&records, &tags, &any, &[]).len();
        prop_assert_eq!(counts["true"] + counts["false"], total);
    }

    #[test]
    fn memoized_counts_equal_direct_counts(
        records in records(),
        tags in tags(),
        selection in selection(),
    ) {
        let direct = compute_facet_counts(&records, &selection, &tags);
        let catalog = Catalog::new(records);
        prop_assert_eq!(&*catalog.facet_counts(&selection, &tags), &direct);
        prop_assert_eq!(&*catalog.facet_counts(&selection, &tags), &direct);
    }
}
