//! Request and response envelopes for the `generateContent` call

use serde::Serialize;
use serde_json::Value;

/// Text part of a content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    /// Text content as a string
    pub text: String,
}

/// Content sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    /// Parts that make up the content
    pub parts: Vec<Part>,
}

impl Content {
    /// Create content holding a single text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body for `generateContent`
///
/// Serializes to `{"contents":[{"parts":[{"text":...}]}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct GenerateContentRequest {
    /// Input content for generation
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build the single-prompt envelope, keeping the prompt verbatim
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
        }
    }
}

/// Read `candidates[0].content.parts[0].text` from a response body.
///
/// Returns `None` when any step of the path is missing or has the wrong type.
pub fn candidate_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
