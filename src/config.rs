use crate::assist::{self, AssistConfig};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_ROOT: &str = "generated-projects";

/// Resolved configuration for one generation run. Merged from CLI
/// arguments, an optional config file, and defaults, in that order.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub project_name: String,
    pub output_root: PathBuf,
    /// Raw structured request text (headings / bold labels, see parser).
    pub request_text: String,
    /// Present only when the caller supplied a credential; absence means
    /// every file takes the template path.
    pub assist: Option<AssistConfig>,
}

impl GeneratorConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            project_name,
            config,
            request: cli_request,
            request_file: cli_request_file,
            output_root: cli_output_root,
            assist_endpoint: cli_assist_endpoint,
            assist_api_key: cli_assist_api_key,
            assist_model: cli_assist_model,
            assist_max_tokens: cli_assist_max_tokens,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            output_root: file_output_root,
            request_file: file_request_file,
            assist_endpoint: file_assist_endpoint,
            assist_api_key: file_assist_api_key,
            assist_model: file_assist_model,
            assist_max_tokens: file_assist_max_tokens,
        } = file_config;

        let project_name = project_name.trim().to_string();
        anyhow::ensure!(!project_name.is_empty(), "project name must not be empty");

        let request_text = match (cli_request, cli_request_file.or(file_request_file)) {
            (Some(text), _) => text,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("failed to read request file {path:?}"))?,
            (None, None) => String::new(),
        };

        let output_root = cli_output_root
            .or(file_output_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT));

        let assist = cli_assist_api_key
            .or(file_assist_api_key)
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| AssistConfig {
                endpoint: cli_assist_endpoint
                    .or(file_assist_endpoint)
                    .unwrap_or_else(|| assist::DEFAULT_ENDPOINT.to_string()),
                api_key,
                model: cli_assist_model
                    .or(file_assist_model)
                    .unwrap_or_else(|| assist::DEFAULT_MODEL.to_string()),
                max_tokens: cli_assist_max_tokens
                    .or(file_assist_max_tokens)
                    .unwrap_or(assist::DEFAULT_MAX_TOKENS),
                timeout: assist::DEFAULT_TIMEOUT,
            });

        Ok(Self {
            project_name,
            output_root,
            request_text,
            assist,
        })
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "scaffold-gen",
    about = "Generate framework starter trees from a project brief",
    version
)]
pub struct CliArgs {
    #[arg(value_name = "NAME", help = "Name of the project to generate")]
    pub project_name: String,

    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        value_name = "TEXT",
        conflicts_with = "request_file",
        help = "Inline structured request text"
    )]
    pub request: Option<String>,

    #[arg(
        long,
        env = "SCAFFOLD_REQUEST_FILE",
        value_name = "FILE",
        help = "File containing the structured request text"
    )]
    pub request_file: Option<PathBuf>,

    #[arg(
        long,
        env = "SCAFFOLD_OUTPUT_ROOT",
        value_name = "DIR",
        help = "Directory that receives generated project trees"
    )]
    pub output_root: Option<PathBuf>,

    #[arg(
        long,
        env = "SCAFFOLD_ASSIST_ENDPOINT",
        value_name = "URL",
        help = "Generative assist completion endpoint"
    )]
    pub assist_endpoint: Option<String>,

    #[arg(
        long,
        env = "SCAFFOLD_ASSIST_API_KEY",
        value_name = "KEY",
        hide_env_values = true,
        help = "Generative assist credential; omit to use local templates only"
    )]
    pub assist_api_key: Option<String>,

    #[arg(
        long,
        env = "SCAFFOLD_ASSIST_MODEL",
        value_name = "MODEL",
        help = "Generative assist model identifier"
    )]
    pub assist_model: Option<String>,

    #[arg(
        long,
        env = "SCAFFOLD_ASSIST_MAX_TOKENS",
        value_name = "N",
        value_parser = clap::value_parser!(u32),
        help = "Response size cap for generative assist calls"
    )]
    pub assist_max_tokens: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    output_root: Option<PathBuf>,
    request_file: Option<PathBuf>,
    assist_endpoint: Option<String>,
    assist_api_key: Option<String>,
    assist_model: Option<String>,
    assist_max_tokens: Option<u32>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
