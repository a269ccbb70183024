//! Fixed entity lexicon: canonical domain noun -> synonym keywords.
//!
//! Declaration order is contractual. The extractor scans entities in this
//! order, so when a keyword appears under more than one canonical entity
//! (`transaction` is listed under both `order` and `payment`), the earlier
//! entry wins. Reordering this table changes extraction results.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Canonical entity emitted when no keyword matches a description.
pub const DEFAULT_ENTITY: &str = "item";

pub static ENTITY_LEXICON: Lazy<IndexMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut lexicon: IndexMap<&'static str, &'static [&'static str]> = IndexMap::new();
        lexicon.insert("user", &["user", "account", "profile", "member"][..]);
        lexicon.insert("product", &["product", "item", "goods", "merchandise"][..]);
        lexicon.insert("order", &["order", "purchase", "transaction"][..]);
        lexicon.insert("post", &["post", "article", "blog"][..]);
        lexicon.insert("comment", &["comment", "review", "feedback"][..]);
        lexicon.insert("task", &["task", "todo", "assignment", "job"][..]);
        lexicon.insert("project", &["project", "workspace"][..]);
        lexicon.insert("customer", &["customer", "client"][..]);
        lexicon.insert("invoice", &["invoice", "bill", "receipt"][..]);
        lexicon.insert("payment", &["payment", "transaction"][..]);
        lexicon.insert("booking", &["booking", "reservation", "appointment"][..]);
        lexicon.insert("event", &["event", "meeting", "conference"][..]);
        lexicon.insert("category", &["category", "tag", "label"][..]);
        lexicon.insert("message", &["message", "chat", "conversation"][..]);
        lexicon.insert("notification", &["notification", "alert"][..]);
        lexicon.insert("report", &["report", "analytics", "statistics"][..]);
        lexicon.insert("document", &["document", "file", "attachment"][..]);
        lexicon.insert("inventory", &["inventory", "stock", "warehouse"][..]);
        lexicon.insert("employee", &["employee", "staff", "worker"][..]);
        lexicon.insert("department", &["department", "division", "team"][..]);
        lexicon
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_lowercase_singular_identifiers() {
        for (entity, keywords) in ENTITY_LEXICON.iter() {
            assert!(
                entity.chars().all(|c| c.is_ascii_lowercase()),
                "{entity} is not a lowercase identifier"
            );
            assert!(!keywords.is_empty(), "{entity} has no keywords");
        }
    }

    #[test]
    fn declaration_order_is_stable() {
        let first_three: Vec<&str> = ENTITY_LEXICON.keys().take(3).copied().collect();
        assert_eq!(first_three, vec!["user", "product", "order"]);
    }
}
