//! Error handling for the Gemini API invocation
//!
//! Non-success HTTP statuses are not errors here; they are reported through
//! [`Outcome::Failed`](crate::client::Outcome::Failed). Only faults that stop
//! the call from completing end up in [`Error`].

use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Gemini API client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (DNS, connection, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failure reading a prompt or writing the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
