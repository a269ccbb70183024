use scaffold_gen::extract::{MAX_ENTITIES, extract};
use scaffold_gen::lexicon::{DEFAULT_ENTITY, ENTITY_LEXICON};

#[test]
fn blog_description_extracts_lexicon_ordered_entities() {
    let entities = extract("A blog platform with posts, comments, and user profiles");
    assert_eq!(entities, vec!["user", "post", "comment"]);
}

#[test]
fn ecommerce_description_resolves_customer_to_its_canonical_entry() {
    let entities = extract("An e-commerce API with products, orders, and customer management");
    assert_eq!(entities, vec!["product", "order", "customer"]);
}

#[test]
fn unmatched_description_falls_back_to_default_entity() {
    assert_eq!(extract("a weather dashboard for meteorologists"), vec![
        DEFAULT_ENTITY
    ]);
    assert_eq!(extract(""), vec![DEFAULT_ENTITY]);
}

#[test]
fn extraction_is_capped_at_three_entities() {
    let entities = extract("users write posts with comments about products and orders");
    assert_eq!(entities.len(), MAX_ENTITIES);
    assert_eq!(entities, vec!["user", "product", "order"]);
}

#[test]
fn y_ending_keywords_match_both_forms() {
    assert_eq!(extract("manage categories"), vec!["category"]);
    assert_eq!(extract("manage every category"), vec!["category"]);
    assert_eq!(extract("track inventories across sites"), vec!["inventory"]);
}

#[test]
fn keywords_match_optional_plural_with_word_boundaries() {
    assert_eq!(extract("invoices and bills"), vec!["invoice"]);
    // substrings must not match: "userspace" is not "user"
    assert_eq!(extract("a userspace scheduler"), vec![DEFAULT_ENTITY]);
}

#[test]
fn overlapping_keyword_uses_lexicon_declaration_order() {
    // `transaction` appears under both `order` and `payment`; the earlier
    // declaration wins.
    assert_eq!(extract("logs every transaction"), vec!["order"]);
    // naming payments directly still reaches the payment entity
    assert_eq!(extract("handles payments"), vec!["payment"]);
}

#[test]
fn results_are_always_canonical_lexicon_keys() {
    let entities = extract("clients leave feedback on merchandise");
    assert_eq!(entities, vec!["product", "comment", "customer"]);
    for entity in &entities {
        assert!(ENTITY_LEXICON.contains_key(entity.as_str()));
    }
}
