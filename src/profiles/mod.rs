//! Framework profiles: one scaffold-generation capability with four
//! variants sharing the extractor, inflector, and assembler.
//!
//! Every profile is a pure function of `(project, config)` on the template
//! path: two runs with the same inputs and no assist instance produce
//! byte-identical files. When an assist instance is supplied, each
//! per-entity code unit is offered to the service first and falls back to
//! its local template on any failure.

pub mod django;
pub mod fastapi;
pub mod flask;
pub mod react;

use crate::assist::GenerativeAssist;
use crate::model::{FrameworkKind, GeneratedFile, ProjectConfig};
use async_trait::async_trait;

/// Files produced by a profile plus the advisory warnings gathered while
/// producing them (assist fallbacks, mostly).
#[derive(Debug, Default)]
pub struct ProfileOutput {
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
}

#[async_trait]
pub trait FrameworkProfile: Send + Sync {
    fn kind(&self) -> FrameworkKind;

    async fn generate(
        &self,
        project: &str,
        config: &ProjectConfig,
        assist: Option<&GenerativeAssist>,
    ) -> ProfileOutput;
}

pub fn profile_for(kind: FrameworkKind) -> Box<dyn FrameworkProfile> {
    match kind {
        FrameworkKind::Django => Box::new(django::DjangoProfile),
        FrameworkKind::FastApi => Box::new(fastapi::FastApiProfile),
        FrameworkKind::Flask => Box::new(flask::FlaskProfile),
        FrameworkKind::React => Box::new(react::ReactProfile),
    }
}

/// Natural-language prompt for one per-entity code unit.
pub(crate) fn entity_prompt(
    kind: FrameworkKind,
    unit: &str,
    entity: &str,
    config: &ProjectConfig,
) -> String {
    let conventions = match kind {
        FrameworkKind::Django => {
            "Follow Django 4 conventions: a models.Model subclass with name, \
             description, created_at and updated_at fields."
        }
        FrameworkKind::FastApi => {
            "Follow FastAPI conventions: Pydantic request/response models, typed \
             path operations for list/get/create/update/delete, an in-memory store \
             seeded with two sample records."
        }
        FrameworkKind::Flask => {
            "Follow Flask-RESTful conventions: Resource subclasses with \
             get/post/put/delete methods over an in-memory store."
        }
        FrameworkKind::React => {
            "Follow modern React conventions: a function component using hooks, \
             rendering the collection with sample data as fallback."
        }
    };
    let description = if config.description.is_empty() {
        "(no description provided)"
    } else {
        config.description.as_str()
    };
    format!(
        "Write the {unit} for the `{entity}` resource of a {kind} project.\n\
         Project description: {description}\n\
         {conventions}\n\
         Return only source code, with no commentary or markdown fences."
    )
}

/// Resolve one per-entity code unit: assist first when available, local
/// template on absence or on any failure. The fallback is silent apart
/// from a warning line.
pub(crate) async fn assisted_unit(
    assist: Option<&GenerativeAssist>,
    prompt: String,
    template: String,
    unit: &str,
    warnings: &mut Vec<String>,
) -> String {
    let Some(assist) = assist else {
        return template;
    };
    match assist.generate(&prompt).await {
        Ok(text) => {
            tracing::debug!(%unit, model = assist.model(), "assist produced unit");
            text
        }
        Err(error) => {
            tracing::warn!(%unit, %error, "assist call failed, using local template");
            warnings.push(format!("assist unavailable for {unit}: {error}"));
            template
        }
    }
}
