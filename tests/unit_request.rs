use scaffold_gen::model::{Database, Feature, FrameworkKind};
use scaffold_gen::request::{DEFAULT_FRAMEWORK, DEFAULT_STYLING, parse_request};

const ISSUE_STYLE_REQUEST: &str = r#"### Framework
FastAPI

### Database
PostgreSQL

### Project Description
An e-commerce API with products, orders, and customer management

### Features
- [x] Docker Support
- [X] Unit Tests
- [ ] Celery
- [x] Quantum Mode
"#;

#[test]
fn parses_heading_style_request() {
    let (config, warnings) = parse_request(ISSUE_STYLE_REQUEST);

    assert_eq!(config.framework, FrameworkKind::FastApi);
    assert_eq!(config.database, Database::Postgres);
    assert_eq!(
        config.description,
        "An e-commerce API with products, orders, and customer management"
    );
    assert_eq!(config.entities, vec!["product", "order", "customer"]);
    assert!(warnings.is_empty());
}

#[test]
fn only_checked_recognized_toggles_become_features() {
    let (config, _) = parse_request(ISSUE_STYLE_REQUEST);

    assert!(config.has_feature(Feature::Docker));
    assert!(config.has_feature(Feature::Tests));
    // unchecked box
    assert!(!config.has_feature(Feature::Celery));
    // "Quantum Mode" is not in the vocabulary and is silently ignored
    assert_eq!(config.features.len(), 2);
}

#[test]
fn parses_bold_label_request() {
    let raw = "**Framework:** Flask\n**Database:** MongoDB\n\n\
               **Description:** A task tracker for teams\n\n\
               **Other:** ignored\n";
    let (config, _) = parse_request(raw);

    assert_eq!(config.framework, FrameworkKind::Flask);
    assert_eq!(config.database, Database::MongoDb);
    assert_eq!(config.description, "A task tracker for teams");
    assert_eq!(config.entities, vec!["task", "department"]);
}

#[test]
fn field_order_does_not_matter() {
    let raw = "### Description\nA booking portal\n\n### Framework\nDjango\n";
    let (config, _) = parse_request(raw);
    assert_eq!(config.framework, FrameworkKind::Django);
    assert_eq!(config.description, "A booking portal");
    assert_eq!(config.entities, vec!["booking"]);
}

#[test]
fn empty_request_produces_default_entity_scaffold() {
    let (config, warnings) = parse_request("");
    assert_eq!(config.framework, DEFAULT_FRAMEWORK);
    assert_eq!(config.database, Database::Sqlite);
    assert_eq!(config.styling, DEFAULT_STYLING);
    assert!(config.features.is_empty());
    assert_eq!(config.entities, vec!["item"]);
    assert!(warnings.is_empty());
}

#[test]
fn unknown_framework_falls_back_with_a_warning() {
    let (config, warnings) = parse_request("### Framework\nSpring Boot\n");
    assert_eq!(config.framework, DEFAULT_FRAMEWORK);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Spring Boot"));
}

#[test]
fn styling_field_is_recognized_for_spa_requests() {
    let raw = "### Framework\nReact\n\n### Styling\nTailwind CSS\n\n\
               ### Description\nA dashboard of reports\n";
    let (config, _) = parse_request(raw);
    assert_eq!(config.framework, FrameworkKind::React);
    assert_eq!(config.styling, "Tailwind CSS");
    assert_eq!(config.entities, vec!["report"]);
}
