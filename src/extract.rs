//! Entity extraction from free-text project descriptions.
//!
//! Scans the description against [`crate::lexicon::ENTITY_LEXICON`] in
//! declaration order with word-boundary keyword patterns. A keyword ending
//! in `y` matches both the `y` and `ies` forms ("category", "categories");
//! every other keyword matches with an optional trailing `s`. The first
//! matching keyword records its canonical entity and the remaining keywords
//! of that entity are skipped.
//!
//! Extraction never fails: an unmatched description yields the single
//! default entity.

use crate::lexicon::{DEFAULT_ENTITY, ENTITY_LEXICON};
use once_cell::sync::Lazy;
use regex::Regex;

/// Cap on extracted entities, bounding the generated surface area.
pub const MAX_ENTITIES: usize = 3;

static KEYWORD_PATTERNS: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    ENTITY_LEXICON
        .iter()
        .map(|(entity, keywords)| {
            let patterns = keywords.iter().map(|kw| keyword_pattern(kw)).collect();
            (*entity, patterns)
        })
        .collect()
});

fn keyword_pattern(keyword: &str) -> Regex {
    let pattern = match keyword.strip_suffix('y') {
        Some(stem) => format!(r"\b{}(?:y|ies)\b", regex::escape(stem)),
        None => format!(r"\b{}s?\b", regex::escape(keyword)),
    };
    Regex::new(&pattern).expect("lexicon keyword pattern is valid")
}

/// Extract up to [`MAX_ENTITIES`] canonical entity names from a description.
pub fn extract(description: &str) -> Vec<String> {
    let haystack = description.to_lowercase();
    let mut entities = Vec::new();

    for (entity, patterns) in KEYWORD_PATTERNS.iter() {
        if entities.len() == MAX_ENTITIES {
            break;
        }
        if patterns.iter().any(|pattern| pattern.is_match(&haystack)) {
            entities.push((*entity).to_string());
        }
    }

    if entities.is_empty() {
        entities.push(DEFAULT_ENTITY.to_string());
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_and_y_forms_match() {
        assert_eq!(extract("tracks categories of goods"), vec![
            "product", "category"
        ]);
        assert_eq!(extract("one category"), vec!["category"]);
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "userspace" must not match the `user` keyword
        assert_eq!(extract("a userspace tool"), vec![DEFAULT_ENTITY]);
    }

    #[test]
    fn overlapping_keyword_resolves_to_earlier_entity() {
        // `transaction` is listed under both `order` and `payment`;
        // declaration order makes `order` the canonical result.
        assert_eq!(extract("records every transaction"), vec!["order"]);
    }
}
