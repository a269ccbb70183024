//! Project assembler: persists generated files and the summary document.
//!
//! Directory creation is idempotent and file writes overwrite any existing
//! file at the same path without warning (documented destructive-overwrite
//! policy). Writes are not transactional; a mid-run failure leaves a
//! partially populated directory behind.

use crate::error::ScaffoldError;
use crate::inflect::{capitalize, pluralize};
use crate::model::{FrameworkKind, GeneratedFile, GenerationResult, ProjectConfig};
use chrono::{SecondsFormat, Utc};
use std::fs;
use std::path::Path;

/// Name of the summary document written alongside the scaffold.
pub const REPORT_FILE: &str = "generation-report.md";

/// Write every generated file under `output_root/project`, creating parent
/// directories as needed. Filesystem failures are fatal and carry the
/// offending path.
pub fn assemble(
    output_root: &Path,
    project: &str,
    files: &[GeneratedFile],
    warnings: Vec<String>,
) -> Result<GenerationResult, ScaffoldError> {
    let project_root = output_root.join(project);
    fs::create_dir_all(&project_root)
        .map_err(|error| ScaffoldError::io(project_root.clone(), error))?;

    for file in files {
        let target = project_root.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|error| ScaffoldError::io(parent, error))?;
        }
        fs::write(&target, &file.contents)
            .map_err(|error| ScaffoldError::io(target.clone(), error))?;
        tracing::debug!(path = %target.display(), bytes = file.contents.len(), "wrote file");
    }

    Ok(GenerationResult {
        root: project_root,
        files_written: files.len(),
        warnings,
    })
}

/// Build the human-readable summary document: detected entities, generated
/// endpoints, the file inventory, and any warnings gathered along the way.
pub fn generation_report(
    project: &str,
    config: &ProjectConfig,
    files: &[GeneratedFile],
    warnings: &[String],
) -> GeneratedFile {
    let mut out = format!(
        "# Generation report: {project}\n\n\
         Generated {} for framework `{}`.\n\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        config.framework
    );

    out.push_str("## Detected entities\n\n");
    for entity in &config.entities {
        match config.framework {
            FrameworkKind::React => out.push_str(&format!(
                "- **{}**: feature module at `src/features/{entity}/`\n",
                capitalize(entity)
            )),
            _ => out.push_str(&format!(
                "- **{}**: CRUD endpoints at `/api/{}`\n",
                capitalize(entity),
                pluralize(entity)
            )),
        }
    }

    if !config.features.is_empty() {
        out.push_str("\n## Features\n\n");
        for feature in &config.features {
            out.push_str(&format!("- {}\n", feature.label()));
        }
    }

    out.push_str("\n## Files\n\n");
    for file in files {
        out.push_str(&format!("- `{}`\n", file.path.display()));
    }

    if !warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for warning in warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }

    out.push_str("\nSee `README.md` in the project root for setup instructions.\n");
    GeneratedFile::new(REPORT_FILE, out)
}
