//! Property-based invariants for the extraction and inflection layers.

use proptest::prelude::*;
use scaffold_gen::extract::{MAX_ENTITIES, extract};
use scaffold_gen::inflect::{capitalize, pluralize};
use scaffold_gen::lexicon::{DEFAULT_ENTITY, ENTITY_LEXICON};

proptest! {
    #[test]
    fn extraction_count_is_always_bounded(description in ".{0,400}") {
        let entities = extract(&description);
        prop_assert!(!entities.is_empty());
        prop_assert!(entities.len() <= MAX_ENTITIES);
    }

    #[test]
    fn extraction_yields_only_canonical_names(description in "[a-z ]{0,200}") {
        for entity in extract(&description) {
            prop_assert!(
                entity == DEFAULT_ENTITY || ENTITY_LEXICON.contains_key(entity.as_str()),
                "non-canonical entity {entity:?}"
            );
        }
    }

    #[test]
    fn extraction_never_repeats_an_entity(description in "[a-z ]{0,200}") {
        let entities = extract(&description);
        let mut deduped = entities.clone();
        deduped.dedup();
        prop_assert_eq!(entities, deduped);
    }

    #[test]
    fn pluralize_is_idempotent(word in "[a-z]{1,12}") {
        let once = pluralize(&word);
        prop_assert_eq!(pluralize(&once), once.clone());
    }

    #[test]
    fn capitalize_preserves_the_tail(word in "[a-z]{1,12}") {
        let capitalized = capitalize(&word);
        prop_assert_eq!(capitalized.len(), word.len());
        prop_assert_eq!(&capitalized[1..], &word[1..]);
    }
}
