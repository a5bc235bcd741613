//! Configuration for the Gemini API client

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model
pub const MODEL_VAR: &str = "GEMINI_MODEL";

/// Environment variable overriding the API host
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

/// Configuration for the Gemini API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for authentication, sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Base URL for the API (can be overridden for testing)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version to use
    #[serde(default)]
    pub api_version: ApiVersion,

    /// Model that receives the prompt
    #[serde(default = "default_model")]
    pub model: String,

    /// HTTP client configuration
    #[serde(default)]
    pub http_config: HttpConfig,
}

/// API version to use for requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum ApiVersion {
    /// Stable v1 API
    #[serde(rename = "v1")]
    V1,
    /// Beta v1 API, where `generateContent` for flash models lives
    #[default]
    #[serde(rename = "v1beta")]
    V1Beta,
}

impl ApiVersion {
    /// Convert the API version to a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V1Beta => "v1beta",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(ApiVersion::V1),
            "v1beta" => Ok(ApiVersion::V1Beta),
            other => Err(crate::error::Error::Config(format!(
                "unknown API version '{}', expected v1 or v1beta",
                other
            ))),
        }
    }
}

/// HTTP client configuration
///
/// Both timeouts are unset by default, which leaves the transport defaults in
/// place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// Connection timeout
    #[serde(default, with = "humantime_serde")]
    pub connect_timeout: Option<Duration>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

impl GeminiConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// A missing `GEMINI_API_KEY` yields an empty key. The remote service
    /// rejects it, so it is not treated as a local error.
    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var(API_KEY_VAR).unwrap_or_default());

        if let Some(model) = non_empty_var(MODEL_VAR) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        config
    }

    /// Full `generateContent` URL for the configured model, without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version.as_str(),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            api_version: ApiVersion::default(),
            model: default_model(),
            http_config: HttpConfig::default(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
