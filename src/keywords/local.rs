// Local rule-based keyword generator.
//
// No model, no network: lowercase the input, split it into tokens, keep the
// longer ones, then top up with category terms and a general-purpose list.
// Output order is insertion order and every keyword appears at most once.

use std::collections::HashSet;

use super::lists::{category_terms, FALLBACK_KEYWORDS, GENERAL_KEYWORDS};
use super::traits::KeywordGenerator;
use super::MAX_KEYWORDS;

/// Tokens must be longer than this many characters to be kept.
pub const TOKEN_LEN_THRESHOLD: usize = 3;

/// The default generator used by the HTTP service and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGenerator;

impl KeywordGenerator for LocalGenerator {
    fn generate(&self, text: Option<&str>, category: Option<&str>) -> Vec<String> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return self.fallback(),
        };

        let mut keywords = OrderedSet::default();

        for token in tokenize(text) {
            keywords.insert(token);
        }

        if let Some(terms) = category.and_then(category_terms) {
            for term in terms {
                keywords.insert((*term).to_string());
            }
        }

        for term in GENERAL_KEYWORDS {
            keywords.insert((*term).to_string());
        }

        let mut keywords = keywords.into_vec();
        keywords.truncate(MAX_KEYWORDS);
        keywords
    }

    fn fallback(&self) -> Vec<String> {
        FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    fn model_name(&self) -> &'static str {
        "local-generator"
    }
}

/// Lowercase `text` and split it on runs of whitespace, commas and periods,
/// keeping tokens longer than [`TOKEN_LEN_THRESHOLD`] characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.')
        .filter(|token| token.chars().count() > TOKEN_LEN_THRESHOLD)
        .map(str::to_string)
        .collect()
}

/// Insertion-ordered set of strings.
#[derive(Default)]
struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    fn insert(&mut self, item: String) {
        if self.seen.insert(item.clone()) {
            self.items.push(item);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
