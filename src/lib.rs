//! # gemini-analyze
//!
//! Send a single prompt to Google's Gemini `generateContent` endpoint and
//! print the generated text.
//!
//! One call is made per invocation. A 200 response is reduced to
//! `candidates[0].content.parts[0].text`; any other status is reported with
//! its raw body. There is no retry, streaming or conversation state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_analyze::{ApiInvoker, GeminiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment variable GEMINI_API_KEY
//!     let client = GeminiClient::from_env()?;
//!
//!     let invoker = ApiInvoker::new(client);
//!     invoker
//!         .invoke("Summarize these findings", &mut std::io::stdout())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod invoker;
pub mod models;

// Re-export main types
pub use client::{GeminiClient, GeminiClientBuilder, Outcome};
pub use config::{ApiVersion, GeminiConfig, HttpConfig};
pub use error::{Error, Result};
pub use invoker::ApiInvoker;
pub use models::{candidate_text, Content, GenerateContentRequest, Part};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiInvoker, Content, GeminiClient, GeminiClientBuilder, GenerateContentRequest, Outcome,
        Part, Result,
    };
}
