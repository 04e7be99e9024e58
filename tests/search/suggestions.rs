//! Autocomplete over the fixture catalog.

use meikan::scoring::relevance_score;
use meikan::{generate_suggestions, Category, FacetEntry, FacetIndex, HighlightRange, SuggestionCursor};

use crate::common::FIXTURE_CATALOG;

#[test]
fn masa_suggests_smiths_then_famous_swords() {
    let groups = FIXTURE_CATALOG.suggest("masa");
    let categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
    assert_eq!(categories, vec![Category::Smiths, Category::Meito]);

    let smiths: Vec<&str> = groups[0].suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(smiths, vec!["Masamune", "Masahide"]);
    assert_eq!(groups[0].suggestions[0].count, 2);

    let meito = &groups[1].suggestions[0];
    assert_eq!(meito.text, "Fudo Masamune");
    assert_eq!(meito.highlight, Some(HighlightRange { start: 5, end: 9 }));
}

#[test]
fn authentication_suggestions_count_tiers() {
    let groups = FIXTURE_CATALOG.suggest("juyo");
    let auth = groups
        .iter()
        .find(|g| g.category == Category::Authentication)
        .expect("authentication group");
    let juyo = auth.suggestions.iter().find(|s| s.text == "Juyo").expect("Juyo tier");
    // Tokubetsu Juyo 12 also reads as a Juyo session.
    assert_eq!(juyo.count, 4);
}

#[test]
fn short_query_gives_nothing() {
    assert!(FIXTURE_CATALOG.suggest("m").is_empty());
    assert!(FIXTURE_CATALOG.suggest("").is_empty());
}

#[test]
fn short_prefix_stays_near_the_top() {
    let index = FacetIndex::from_entries([(
        Category::Smiths,
        vec![
            FacetEntry::new("Masamune Nagamitsu", 50),
            FacetEntry::new("Nobumasa", 80),
            FacetEntry::new("Masa", 5),
        ],
    )]);
    let short = relevance_score("Masa", "masa", 5);
    let long = relevance_score("Masamune Nagamitsu", "masa", 50);
    assert!((short - 124.575).abs() < 0.01);
    assert!((long - 128.195).abs() < 0.01);

    // The popular long prefix edges ahead; the plain substring match can't.
    let groups = generate_suggestions("masa", &index, 8);
    let order: Vec<&str> = groups[0].suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(order, vec!["Masamune Nagamitsu", "Masa", "Nobumasa"]);
}

#[test]
fn cursor_walks_the_fixture_suggestions() {
    let groups = FIXTURE_CATALOG.suggest("masa");
    let mut cursor = SuggestionCursor::new(&groups);
    assert_eq!(cursor.total(), 3);
    assert_eq!(cursor.previous(), Some(2));
    assert_eq!(cursor.selected_text(&groups), Some("Fudo Masamune"));
    assert_eq!(cursor.next(), Some(0));
    assert_eq!(cursor.selected_text(&groups), Some("Masamune"));
    cursor.reset();
    assert_eq!(cursor.selected_text(&groups), None);
}
