use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use strum::Display;

/// Target framework profile for a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrameworkKind {
    Django,
    FastApi,
    Flask,
    React,
}

impl FrameworkKind {
    /// Resolve a free-text framework label from a request. Matching is
    /// substring-based and case-insensitive, mirroring how briefs spell
    /// framework names ("FastAPI", "fast-api", "React + Vite").
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.to_ascii_lowercase().replace(['-', '_', ' '], "");
        if needle.contains("django") {
            Some(FrameworkKind::Django)
        } else if needle.contains("fastapi") {
            Some(FrameworkKind::FastApi)
        } else if needle.contains("flask") {
            Some(FrameworkKind::Flask)
        } else if needle.contains("react") {
            Some(FrameworkKind::React)
        } else {
            None
        }
    }

    /// Pinned framework version emitted into generated manifests.
    pub fn default_version(&self) -> &'static str {
        match self {
            FrameworkKind::Django => "4.2.0",
            FrameworkKind::FastApi => "0.104.0",
            FrameworkKind::Flask => "3.0.0",
            FrameworkKind::React => "18.2.0",
        }
    }
}

/// Database selection carried through to generated dependency manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Database {
    Sqlite,
    Postgres,
    MySql,
    MongoDb,
}

impl Database {
    pub fn from_label(label: &str) -> Self {
        let needle = label.to_ascii_lowercase();
        if needle.contains("postgres") {
            Database::Postgres
        } else if needle.contains("mysql") {
            Database::MySql
        } else if needle.contains("mongo") {
            Database::MongoDb
        } else {
            Database::Sqlite
        }
    }

    /// Human-readable name used in generated READMEs.
    pub fn label(&self) -> &'static str {
        match self {
            Database::Sqlite => "SQLite",
            Database::Postgres => "PostgreSQL",
            Database::MySql => "MySQL",
            Database::MongoDb => "MongoDB",
        }
    }

    /// SQL-backed databases get an ORM layer in REST scaffolds.
    pub fn is_sql(&self) -> bool {
        !matches!(self, Database::MongoDb)
    }
}

/// Fixed vocabulary of feature toggles recognized in request text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    Auth,
    RestApi,
    GraphQl,
    Celery,
    Docker,
    Tests,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Auth,
        Feature::RestApi,
        Feature::GraphQl,
        Feature::Celery,
        Feature::Docker,
        Feature::Tests,
    ];

    /// Label as it appears next to a checkbox in request text.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Auth => "User Authentication",
            Feature::RestApi => "REST API",
            Feature::GraphQl => "GraphQL API",
            Feature::Celery => "Celery",
            Feature::Docker => "Docker Support",
            Feature::Tests => "Unit Tests",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim().to_ascii_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.label().to_ascii_lowercase() == needle)
    }
}

/// Parsed project configuration. Built once by the request parser (the
/// extractor fills `entities` as the final parse step) and read-only from
/// then on.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    pub framework: FrameworkKind,
    pub database: Database,
    pub styling: String,
    pub features: BTreeSet<Feature>,
    pub description: String,
    /// Canonical entity names, 1..=3, lexicon order.
    pub entities: Vec<String>,
}

impl ProjectConfig {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

/// One file of a generated scaffold, path relative to the project root.
/// Owned by the producing profile until handed to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Outcome of one generation run, returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub root: PathBuf,
    pub files_written: usize,
    pub warnings: Vec<String>,
}
