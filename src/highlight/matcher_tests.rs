//! Tests for highlight/matcher

use super::*;

fn ranges(haystack: &str, term: &str, mode: ComparisonMode) -> Vec<Range<usize>> {
    Matches::new(haystack, term, mode, &Culture::default()).collect()
}

#[test]
fn test_empty_inputs_yield_nothing() {
    assert!(ranges("", "a", ComparisonMode::Ordinal).is_empty());
    assert!(ranges("abc", "", ComparisonMode::Ordinal).is_empty());
    assert!(ranges("", "", ComparisonMode::InvariantCulture).is_empty());
}

#[test]
fn test_ordinal_finds_non_overlapping_occurrences() {
    assert_eq!(ranges("aaaa", "aa", ComparisonMode::Ordinal), vec![0..2, 2..4]);
    assert_eq!(ranges("aaa", "aa", ComparisonMode::Ordinal), vec![0..2]);
}

#[test]
fn test_ordinal_is_case_sensitive() {
    assert_eq!(ranges("The the", "the", ComparisonMode::Ordinal), vec![4..7]);
}

#[test]
fn test_ordinal_multibyte_offsets() {
    // "日本" is six bytes, so the match starts at byte 6
    assert_eq!(
        ranges("日本語の日本", "日本", ComparisonMode::Ordinal),
        vec![0..6, 12..18]
    );
}

#[test]
fn test_ordinal_ignore_case() {
    assert_eq!(
        ranges("The THE the", "the", ComparisonMode::OrdinalIgnoreCase),
        vec![0..3, 4..7, 8..11]
    );
}

#[test]
fn test_ordinal_ignore_case_non_ascii() {
    assert_eq!(
        ranges("ÉCOLE école", "école", ComparisonMode::OrdinalIgnoreCase),
        vec![0..6, 7..13]
    );
}

#[test]
fn test_term_is_literal_not_a_pattern() {
    assert_eq!(ranges("a.c abc", "a.c", ComparisonMode::Ordinal), vec![0..3]);
    assert_eq!(
        ranges("(x)* x", "(x)*", ComparisonMode::OrdinalIgnoreCase),
        vec![0..4]
    );
}

#[test]
fn test_culture_rejects_hit_inside_grapheme() {
    // "e" is the base of "e\u{301}" but not a whole grapheme
    assert!(ranges("cafe\u{301}", "cafe", ComparisonMode::CultureSensitive).is_empty());
    assert_eq!(
        ranges("cafe\u{301} cafe", "cafe", ComparisonMode::CultureSensitive),
        vec![7..11]
    );
}

#[test]
fn test_culture_retries_after_rejected_hit() {
    // First "ab" candidate ends inside "b\u{308}"; the second is whole
    let source = "ab\u{308}ab";
    assert_eq!(
        ranges(source, "ab", ComparisonMode::InvariantCulture),
        vec![4..6]
    );
}

#[test]
fn test_culture_matches_composed_against_decomposed() {
    let decomposed = "Cafe\u{301}";
    assert_eq!(
        ranges(decomposed, "Café", ComparisonMode::CultureSensitive),
        vec![0..decomposed.len()]
    );
    assert!(ranges(decomposed, "café", ComparisonMode::CultureSensitive).is_empty());
    assert_eq!(
        ranges(decomposed, "café", ComparisonMode::CultureSensitiveIgnoreCase),
        vec![0..decomposed.len()]
    );
}

#[test]
fn test_term_of_only_ignorables_matches_nothing() {
    assert!(ranges("a\u{200B}b", "\u{200B}", ComparisonMode::CultureSensitive).is_empty());
    assert_eq!(
        ranges("a\u{200B}b", "\u{200B}", ComparisonMode::Ordinal),
        vec![1..4]
    );
}

#[test]
fn test_turkish_culture_folding() {
    let turkish: Culture = "tr-TR".parse().unwrap();
    let found: Vec<_> = Matches::new(
        "İstanbul Istanbul",
        "istanbul",
        ComparisonMode::CultureSensitiveIgnoreCase,
        &turkish,
    )
    .collect();
    // Only the dotted capital folds to "i" under Turkish rules
    assert_eq!(found, vec![0..9]);

    let invariant: Vec<_> = Matches::new(
        "İstanbul Istanbul",
        "istanbul",
        ComparisonMode::InvariantCultureIgnoreCase,
        &turkish,
    )
    .collect();
    assert_eq!(invariant, vec![10..18]);
}

#[test]
fn test_folded_matches_are_produced_on_demand() {
    let mut matches = Matches::new(
        "Ab ab AB",
        "ab",
        ComparisonMode::InvariantCultureIgnoreCase,
        &Culture::default(),
    );
    assert!(matches!(matches, Matches::Folded(_)));
    assert_eq!(matches.next(), Some(0..2));
    assert_eq!(matches.next(), Some(3..5));
    assert_eq!(matches.next(), Some(6..8));
    assert_eq!(matches.next(), None);
    assert_eq!(matches.next(), None);
}

#[test]
fn test_term_folding_to_nothing_is_empty() {
    let matches = Matches::new(
        "a\u{AD}b",
        "\u{AD}",
        ComparisonMode::InvariantCulture,
        &Culture::default(),
    );
    assert!(matches!(matches, Matches::Empty));
}
