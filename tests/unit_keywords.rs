// Unit tests for the keyword generator.
//
// Covers the observable contract: fallback on empty input, the length
// filter, category merging, the 30-keyword cap and determinism.

use std::collections::HashSet;

use easy_keywords::keywords::lists::{
    category_terms, CATEGORY_KEYWORDS, FALLBACK_KEYWORDS, GENERAL_KEYWORDS,
};
use easy_keywords::keywords::local::LocalGenerator;
use easy_keywords::keywords::traits::KeywordGenerator;
use easy_keywords::keywords::{select_text, MAX_KEYWORDS};

fn fallback() -> Vec<String> {
    FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

fn is_static_term(term: &str) -> bool {
    GENERAL_KEYWORDS.contains(&term)
        || CATEGORY_KEYWORDS
            .iter()
            .any(|(_, terms)| terms.contains(&term))
}

// ============================================================
// Fallback behaviour
// ============================================================

#[test]
fn absent_text_returns_fallback() {
    assert_eq!(LocalGenerator.generate(None, None), fallback());
}

#[test]
fn empty_title_with_category_returns_fallback() {
    let text = select_text(Some(""), None);
    assert_eq!(LocalGenerator.generate(text, Some("nature")), fallback());
}

#[test]
fn whitespace_only_text_returns_fallback() {
    assert_eq!(LocalGenerator.generate(Some(" \n\t "), Some("art")), fallback());
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn sunset_over_mountains_keeps_four_letter_tokens() {
    let keywords = LocalGenerator.generate(Some("Sunset over mountains"), None);
    assert_eq!(&keywords[..3], &["sunset", "over", "mountains"]);
}

#[test]
fn short_tokens_are_dropped() {
    let keywords = LocalGenerator.generate(Some("The cat and the big hat"), None);
    for dropped in ["the", "cat", "and", "big", "hat"] {
        assert!(!keywords.contains(&dropped.to_string()), "{dropped} should be dropped");
    }
}

#[test]
fn unknown_category_is_ignored() {
    let with_unknown = LocalGenerator.generate(Some("Harbor lights"), Some("vehicles"));
    let without = LocalGenerator.generate(Some("Harbor lights"), None);
    assert_eq!(with_unknown, without);
}

#[test]
fn known_category_terms_are_merged_once() {
    let keywords = LocalGenerator.generate(Some("Abstract creative painting"), Some("art"));
    // "abstract", "creative" and "painting" come from the title first
    assert_eq!(&keywords[..3], &["abstract", "creative", "painting"]);
    for term in category_terms("art").unwrap() {
        assert_eq!(
            keywords.iter().filter(|k| k.as_str() == *term).count(),
            1,
            "{term} should appear exactly once"
        );
    }
}

#[test]
fn static_terms_bypass_length_filter() {
    let keywords = LocalGenerator.generate(Some("Robot arm"), Some("technology"));
    assert!(keywords.contains(&"ai".to_string()));
}

#[test]
fn description_used_when_title_blank() {
    let text = select_text(Some("   "), Some("Quiet harbor"));
    assert_eq!(text, Some("Quiet harbor"));
    let keywords = LocalGenerator.generate(text, None);
    assert_eq!(&keywords[..2], &["quiet", "harbor"]);
}

#[test]
fn title_wins_over_description() {
    assert_eq!(select_text(Some("Title"), Some("Description")), Some("Title"));
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn output_capped_at_thirty() {
    let long_title: String = (0..50)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let keywords = LocalGenerator.generate(Some(&long_title), Some("nature"));
    assert_eq!(keywords.len(), MAX_KEYWORDS);
    // Input tokens fill the cap before any static list is reached
    assert_eq!(keywords[0], "word0");
    assert_eq!(keywords[29], "word29");
}

#[test]
fn no_padding_below_cap() {
    let keywords = LocalGenerator.generate(Some("Lighthouse"), None);
    assert_eq!(keywords.len(), 1 + GENERAL_KEYWORDS.len());
}

#[test]
fn output_is_lowercase_unique_and_filtered() {
    let inputs = [
        ("Sunset Over MOUNTAINS, Golden Hour.", Some("nature")),
        ("Team Meeting in a Modern Office", Some("business")),
        ("Portrait of a SMILING family", Some("people")),
        ("Circuit board macro", Some("technology")),
        ("Ünïcödé Straße Café", None),
    ];

    for (text, category) in inputs {
        let keywords = LocalGenerator.generate(Some(text), category);
        assert!(keywords.len() <= MAX_KEYWORDS);

        let mut seen = HashSet::new();
        for keyword in &keywords {
            assert!(!keyword.is_empty());
            assert_eq!(keyword, &keyword.to_lowercase());
            assert!(
                keyword.chars().count() > 3 || is_static_term(keyword),
                "{keyword} is short and not from a static list"
            );
            assert!(seen.insert(keyword.to_lowercase()), "duplicate {keyword}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let first = LocalGenerator.generate(Some("Rainy city street at night"), Some("people"));
    let second = LocalGenerator.generate(Some("Rainy city street at night"), Some("people"));
    assert_eq!(first, second);
}

#[test]
fn model_name_is_local_generator() {
    assert_eq!(LocalGenerator.model_name(), "local-generator");
}
