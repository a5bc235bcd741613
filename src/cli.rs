//! Command-line surface

use crate::{
    client::{GeminiClient, Outcome},
    config::{ApiVersion, GeminiConfig},
    error::Result,
    invoker::{render_usage, ApiInvoker},
};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Send a prompt to Gemini and print the generated analysis
///
/// Options go before the prompt. From the first positional argument on,
/// everything is literal: the first one is the prompt and the rest are
/// ignored.
#[derive(Debug, Parser)]
#[command(name = "gemini-analyze", version, about)]
pub struct Cli {
    /// Prompt text, sent verbatim
    #[arg(
        value_name = "PROMPT",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        conflicts_with = "file"
    )]
    pub args: Vec<String>,

    /// Read the prompt from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Model to use (overrides GEMINI_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API host (overrides GEMINI_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// API version path segment: v1 or v1beta
    #[arg(long, value_name = "VERSION")]
    pub api_version: Option<ApiVersion>,
}

impl Cli {
    /// The prompt to send, or `None` when none was supplied
    pub fn prompt(&self) -> Result<Option<String>> {
        if let Some(path) = &self.file {
            return Ok(Some(std::fs::read_to_string(path)?));
        }
        Ok(self.args.first().cloned())
    }

    /// Layer the command-line overrides on top of `config`
    pub fn apply(&self, mut config: GeminiConfig) -> GeminiConfig {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(version) = self.api_version {
            config.api_version = version;
        }
        config
    }
}

/// Print usage when no prompt was given, otherwise send it once.
///
/// Returns the outcome of the call, or `None` when nothing was sent.
pub async fn run<W: Write>(
    cli: &Cli,
    config: GeminiConfig,
    out: &mut W,
) -> Result<Option<Outcome>> {
    let Some(prompt) = cli.prompt()? else {
        render_usage(out)?;
        return Ok(None);
    };

    let client = GeminiClient::builder().config(cli.apply(config)).build()?;
    let outcome = ApiInvoker::new(client).invoke(&prompt, out).await?;

    Ok(Some(outcome))
}
