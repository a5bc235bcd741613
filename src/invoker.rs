//! Prompt in, printed analysis out

use crate::{
    client::{GeminiClient, Outcome},
    error::Result,
    models::GenerateContentRequest,
};
use std::io::Write;
use tracing::debug;

/// Header printed above generated text
pub const ANALYSIS_HEADER: &str = "Gemini Analysis:";

/// Printed when a 200 response carries no candidate text
pub const EXTRACTION_FAILED: &str = "API call succeeded but failed to extract content.";

/// Printed when no prompt was supplied
pub const USAGE: &str = "Please provide input text to analyze.";

/// Sends one prompt and writes the user-facing report
pub struct ApiInvoker {
    client: GeminiClient,
}

impl ApiInvoker {
    /// Wrap a configured client
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Send `prompt` and write the report for its outcome to `out`.
    ///
    /// Exactly one request is sent. Transport faults are returned before
    /// anything is written.
    pub async fn invoke<W: Write>(&self, prompt: &str, out: &mut W) -> Result<Outcome> {
        let request = GenerateContentRequest::from_prompt(prompt);
        debug!(chars = prompt.chars().count(), "Invoking API");

        let outcome = self.client.generate_content(&request).await?;
        render(&outcome, out)?;

        Ok(outcome)
    }
}

/// Write the report for an outcome
pub fn render<W: Write>(outcome: &Outcome, out: &mut W) -> Result<()> {
    match outcome {
        Outcome::Generated { text } => {
            writeln!(out, "{}\n", ANALYSIS_HEADER)?;
            writeln!(out, "{}", text)?;
        }
        Outcome::Unextractable => writeln!(out, "{}", EXTRACTION_FAILED)?,
        Outcome::Failed { status, body } => writeln!(out, "Request failed: {} {}", status, body)?,
    }
    Ok(())
}

/// Write the usage message
pub fn render_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", USAGE)?;
    Ok(())
}
