//! Gemini API client: one POST, one classified outcome

use crate::{
    config::{ApiVersion, GeminiConfig},
    error::{Error, Result},
    models::{candidate_text, GenerateContentRequest},
};

use reqwest::{Client as HttpClient, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Terminal result of a single `generateContent` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// HTTP 200 and the candidate text was found
    Generated {
        /// `candidates[0].content.parts[0].text`
        text: String,
    },
    /// HTTP 200 but the body did not carry the candidate text
    Unextractable,
    /// Any status other than 200
    Failed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

/// Main Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    config: Arc<GeminiConfig>,
    http_client: HttpClient,
}

impl GeminiClient {
    /// Create a new client with the given configuration
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http_client = Self::build_http_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env())
    }

    /// Get a builder for creating a customized client
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }

    /// Send the request once and classify the response.
    ///
    /// Transport faults are returned as errors. Every HTTP response, whatever
    /// its status, becomes an [`Outcome`].
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    pub async fn generate_content(&self, request: &GenerateContentRequest) -> Result<Outcome> {
        let endpoint = self.config.endpoint();

        debug!("Generating content at {}", endpoint);

        let response = self
            .http_client
            .post(&endpoint)
            .query(&[("key", &self.config.api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(Self::classify(status, &body))
    }

    /// Get the configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the HTTP client with configuration
    fn build_http_client(config: &GeminiConfig) -> Result<HttpClient> {
        let mut builder = HttpClient::builder();

        if let Some(timeout) = config.http_config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.http_config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder.build().map_err(Error::from)
    }

    fn classify(status: StatusCode, body: &str) -> Outcome {
        if status != StatusCode::OK {
            return Outcome::Failed {
                status: status.as_u16(),
                body: body.to_string(),
            };
        }

        let text = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| candidate_text(&value).map(str::to_string));

        match text {
            Some(text) => Outcome::Generated { text },
            None => {
                warn!("Response body has no candidate text");
                Outcome::Unextractable
            }
        }
    }
}

/// Builder for creating a customized GeminiClient
#[derive(Default)]
pub struct GeminiClientBuilder {
    config: GeminiConfig,
}

impl GeminiClientBuilder {
    /// Start from an existing configuration
    pub fn config(mut self, config: GeminiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the API version
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.config.api_version = version;
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Build the client
    ///
    /// An empty API key is accepted; the service answers it with a
    /// non-200 status. An empty model would produce a malformed endpoint
    /// path and is rejected.
    pub fn build(self) -> Result<GeminiClient> {
        if self.config.model.trim().is_empty() {
            return Err(Error::Config("model name is required".to_string()));
        }

        GeminiClient::new(self.config)
    }
}
