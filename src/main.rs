use clap::Parser;
use scaffold_gen::{CliArgs, GeneratorConfig, LoggingConfig, init_logging, run_generation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = GeneratorConfig::from_args(cli)?;

    let result = run_generation(config).await?;
    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    println!(
        "Generated {} files at {}",
        result.files_written,
        result.root.display()
    );
    Ok(())
}
