pub mod assemble;
pub mod assist;
pub mod config;
pub mod error;
pub mod extract;
pub mod inflect;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod profiles;
pub mod request;

pub use config::{CliArgs, GeneratorConfig};
pub use error::ScaffoldError;
pub use logging::{LoggingConfig, init_logging};
pub use model::{
    Database, Feature, FrameworkKind, GeneratedFile, GenerationResult, ProjectConfig,
};

use anyhow::Result;
use assist::GenerativeAssist;

/// Run the full pipeline: parse the request, extract entities, expand the
/// selected framework profile, and assemble the project tree.
///
/// Only filesystem failures surface as errors; everything else degrades to
/// defaults or templates and is reported through
/// [`GenerationResult::warnings`].
pub async fn run_generation(config: GeneratorConfig) -> Result<GenerationResult> {
    let GeneratorConfig {
        project_name,
        output_root,
        request_text,
        assist,
    } = config;

    let (project_config, mut warnings) = request::parse_request(&request_text);
    tracing::info!(
        project = %project_name,
        framework = %project_config.framework,
        database = %project_config.database,
        entities = ?project_config.entities,
        "parsed scaffold request"
    );

    let assist = match assist {
        Some(assist_config) => match GenerativeAssist::new(assist_config) {
            Ok(instance) => Some(instance),
            Err(error) => {
                tracing::warn!(%error, "could not build assist client, using local templates");
                warnings.push(format!("assist client unavailable: {error}"));
                None
            }
        },
        None => {
            tracing::debug!("no assist credential supplied, using local templates");
            None
        }
    };

    let profile = profiles::profile_for(project_config.framework);
    let output = profile
        .generate(&project_name, &project_config, assist.as_ref())
        .await;
    warnings.extend(output.warnings);

    let mut files = output.files;
    files.push(assemble::generation_report(
        &project_name,
        &project_config,
        &files,
        &warnings,
    ));

    let result = assemble::assemble(&output_root, &project_name, &files, warnings)?;
    tracing::info!(
        root = %result.root.display(),
        files = result.files_written,
        warnings = result.warnings.len(),
        "scaffold generation complete"
    );
    Ok(result)
}
