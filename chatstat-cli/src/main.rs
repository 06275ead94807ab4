//! chatstat CLI: analyze chat exports. Config from env and optional CLI args.

use anyhow::{Context, Result};
use chatstat_cli::{run_analyze, run_summary, AnalyzerConfig, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AnalyzerConfig::load(cli.command.overrides()).context("Load analyzer config")?;
    chatstat_core::init_tracing(config.log_file.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Analyze { files, format, .. } => {
            run_analyze(&files, &config, format, &mut stdout).await?;
        }
        Commands::Summary { file } => {
            run_summary(&file, &mut stdout).await?;
        }
    }
    Ok(())
}
