//! Parser for the semi-structured request text supplied by the caller.
//!
//! Two textual conventions are recognized interchangeably: a markdown-style
//! heading followed by a value (`### Framework\nFastAPI`) and a bold label
//! with an inline value (`**Framework:** FastAPI`). Every field is located
//! with an independent whole-text search, so field order never matters, and
//! every missing field falls back to a documented default. Parsing never
//! fails; the worst malformed input produces the default-entity scaffold.

use crate::extract;
use crate::model::{Database, Feature, FrameworkKind, ProjectConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const DEFAULT_FRAMEWORK: FrameworkKind = FrameworkKind::Django;
pub const DEFAULT_STYLING: &str = "Plain CSS";

static FRAMEWORK_RE: Lazy<Regex> = Lazy::new(|| field_pattern("Framework"));
static DATABASE_RE: Lazy<Regex> = Lazy::new(|| field_pattern("Database"));
static STYLING_RE: Lazy<Regex> = Lazy::new(|| field_pattern(r"(?:Styling|CSS\s+Framework)"));

static DESC_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)###\s*(?:project\s+)?description\b:?").expect("description heading pattern")
});
static DESC_BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\*\*description:\*\*").expect("description label pattern"));
static NEXT_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*###").expect("heading delimiter pattern"));
static NEXT_BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n\s*\*\*").expect("bold delimiter pattern"));

static CHECKBOX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*]?\s*\[[xX]\]\s*([^\r\n]+)").expect("checkbox pattern"));

fn field_pattern(label: &str) -> Regex {
    let pattern = format!(r"(?i)(?:###\s*{label}\s+([^\n]+)|\*\*{label}:\*\*\s+([^\n]+))");
    Regex::new(&pattern).expect("field pattern is valid")
}

/// Parse a raw request block into a [`ProjectConfig`]. The entity list is
/// populated from the description as the final step. Returns the config
/// together with any advisory warnings produced while parsing.
pub fn parse_request(raw: &str) -> (ProjectConfig, Vec<String>) {
    let mut warnings = Vec::new();

    let framework = match single_line_field(raw, &FRAMEWORK_RE) {
        Some(label) => FrameworkKind::from_label(&label).unwrap_or_else(|| {
            tracing::warn!(framework = %label, "unrecognized framework, using default");
            warnings.push(format!(
                "unrecognized framework {label:?}; defaulting to {DEFAULT_FRAMEWORK}"
            ));
            DEFAULT_FRAMEWORK
        }),
        None => DEFAULT_FRAMEWORK,
    };

    let database = single_line_field(raw, &DATABASE_RE)
        .map(|label| Database::from_label(&label))
        .unwrap_or(Database::Sqlite);

    let styling =
        single_line_field(raw, &STYLING_RE).unwrap_or_else(|| DEFAULT_STYLING.to_string());

    let description = description_field(raw);
    if description.is_empty() {
        tracing::debug!("request carries no description; scaffold uses the default entity");
    }

    let features = feature_toggles(raw);
    let entities = extract::extract(&description);

    let config = ProjectConfig {
        framework,
        database,
        styling,
        features,
        description,
        entities,
    };
    (config, warnings)
}

fn single_line_field(raw: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| value.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// The description runs from its label to the next heading (or, in the
/// bold-label convention, the next blank-line-separated label) or the end
/// of the text.
fn description_field(raw: &str) -> String {
    if let Some(found) = DESC_HEADING_RE.find(raw) {
        let tail = &raw[found.end()..];
        let end = NEXT_HEADING_RE
            .find(tail)
            .map(|delim| delim.start())
            .unwrap_or(tail.len());
        return tail[..end].trim().to_string();
    }
    if let Some(found) = DESC_BOLD_RE.find(raw) {
        let tail = &raw[found.end()..];
        let end = NEXT_BOLD_RE
            .find(tail)
            .map(|delim| delim.start())
            .unwrap_or(tail.len());
        return tail[..end].trim().to_string();
    }
    String::new()
}

/// Checked markers next to the fixed feature vocabulary. Unchecked boxes
/// and unrecognized labels are ignored, not errors.
fn feature_toggles(raw: &str) -> BTreeSet<Feature> {
    let mut features = BTreeSet::new();
    for caps in CHECKBOX_RE.captures_iter(raw) {
        match Feature::from_label(&caps[1]) {
            Some(feature) => {
                features.insert(feature);
            }
            None => {
                tracing::debug!(label = caps[1].trim(), "ignoring unrecognized toggle");
            }
        }
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_bold_conventions_are_interchangeable() {
        let heading = "### Framework\nFastAPI\n### Database\nPostgreSQL\n";
        let (config, warnings) = parse_request(heading);
        assert_eq!(config.framework, FrameworkKind::FastApi);
        assert_eq!(config.database, Database::Postgres);
        assert!(warnings.is_empty());

        let bold = "**Framework:** FastAPI\n**Database:** PostgreSQL\n";
        let (config, _) = parse_request(bold);
        assert_eq!(config.framework, FrameworkKind::FastApi);
        assert_eq!(config.database, Database::Postgres);
    }

    #[test]
    fn description_stops_at_next_heading() {
        let raw = "### Description\nA blog platform\nwith posts.\n### Database\nSQLite\n";
        let (config, _) = parse_request(raw);
        assert_eq!(config.description, "A blog platform\nwith posts.");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let (config, warnings) = parse_request("");
        assert_eq!(config.framework, DEFAULT_FRAMEWORK);
        assert_eq!(config.database, Database::Sqlite);
        assert_eq!(config.styling, DEFAULT_STYLING);
        assert!(config.description.is_empty());
        assert_eq!(config.entities, vec!["item"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_framework_warns_and_defaults() {
        let (config, warnings) = parse_request("### Framework\nRails\n");
        assert_eq!(config.framework, DEFAULT_FRAMEWORK);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Rails"));
    }
}
