use anyhow::Result;
use clap::Parser;
use gemini_analyze::{cli, GeminiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load API key from .env
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let mut stdout = std::io::stdout().lock();

    cli::run(&args, GeminiConfig::from_env(), &mut stdout).await?;

    Ok(())
}
