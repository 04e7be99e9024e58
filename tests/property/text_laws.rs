//! Laws of periods, highlighting, and the facet index.

use meikan::period::extract_year;
use meikan::{build_autocomplete_index, get_sword_periods, highlight_match, matches_period_filter, Era};
use proptest::prelude::*;

use crate::strategies::records;

proptest! {
    #[test]
    fn year_resolves_to_every_containing_era(year in 1u32..2100) {
        let text = format!("{year:04}");
        let expected: Vec<Era> = Era::ALL.into_iter().filter(|e| e.years().contains(&year)).collect();
        prop_assert_eq!(extract_year(&text), Some(year));
        prop_assert_eq!(get_sword_periods(&text), expected);
    }

    #[test]
    fn period_filter_accepts_own_eras(text in "(1[0-9]{3}|1[0-9]XX|Edo|Meiji|Kamakura|NA)") {
        let eras = get_sword_periods(&text);
        for era in &eras {
            prop_assert!(matches_period_filter(&text, &[era.id()]));
        }
        prop_assert!(matches_period_filter(&text, &[] as &[&str]));
        if eras.is_empty() {
            prop_assert!(!matches_period_filter(&text, &["kamakura"]));
        }
    }

    #[test]
    fn highlight_marks_the_query(prefix in "[a-z ]{0,8}", query in "[a-z]{1,5}", suffix in "[a-z ]{0,8}") {
        let text = format!("{prefix}{}{suffix}", query.to_uppercase());
        let range = highlight_match(&text, &query).expect("query is inside the text");
        let marked: String = text.chars().skip(range.start).take(range.end - range.start).collect();
        prop_assert_eq!(marked.to_lowercase(), query);
        prop_assert!(range.end <= text.chars().count());
    }

    #[test]
    fn index_counts_are_sorted_and_positive(records in records()) {
        let index = build_autocomplete_index(&records);
        for (_, entries) in index.iter() {
            prop_assert!(entries.windows(2).all(|w| w[0].count >= w[1].count));
            prop_assert!(entries.iter().all(|e| e.count > 0));
        }
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn parallel_index_matches_sequential(records in records()) {
        use meikan::FacetIndex;
        prop_assert_eq!(FacetIndex::build_parallel(&records), FacetIndex::build(&records));
    }
}
