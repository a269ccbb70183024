use scaffold_gen::inflect::{capitalize, pluralize};

#[test]
fn pluralize_handles_each_ending_class() {
    assert_eq!(pluralize("category"), "categories");
    assert_eq!(pluralize("inventory"), "inventories");
    assert_eq!(pluralize("business"), "business");
    assert_eq!(pluralize("user"), "users");
}

#[test]
fn pluralize_is_idempotent_for_every_ending_class() {
    for word in ["category", "inventory", "business", "user"] {
        let once = pluralize(word);
        let twice = pluralize(&once);
        assert_eq!(once, twice, "pluralize not idempotent for {word}");
    }
}

#[test]
fn capitalize_upper_cases_only_the_first_character() {
    assert_eq!(capitalize("order"), "Order");
    assert_eq!(capitalize("Order"), "Order");
    assert_eq!(capitalize("x"), "X");
    assert_eq!(capitalize(""), "");
}
