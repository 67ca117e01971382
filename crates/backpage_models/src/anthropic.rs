//! Anthropic API client.

use async_trait::async_trait;
use backpage_core::GenerationRequest;
use backpage_error::{BackpageResult, ConfigError, ModelError, ModelErrorKind};
use backpage_interface::StoryModel;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default model identifier for story generation.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Wire request for the messages API.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

/// One conversation turn on the wire.
#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Wire response from the messages API.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

/// One content block of a response; only text blocks carry story output.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client with a bounded request timeout.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., [`DEFAULT_MODEL`])
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns a config error if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> BackpageResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("failed to build HTTP client: {}", e)))?;
        debug!("Creating new Anthropic client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl StoryModel for AnthropicClient {
    #[instrument(skip(self, request), fields(model = %self.model, tone = %request.tone))]
    async fn generate(&self, request: &GenerationRequest) -> BackpageResult<String> {
        debug!("Sending request to Anthropic API");

        let wire_request = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: &request.system,
            messages: vec![WireMessage {
                role: "user",
                content: &request.user,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelError::new(ModelErrorKind::Http(format!("request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelError::new(ModelErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let decoded: MessagesResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelError::new(ModelErrorKind::Parse(format!(
                "failed to parse response: {}",
                e
            )))
        })?;

        if let Some(usage) = &decoded.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Received response from Anthropic"
            );
        }

        let text = decoded
            .content
            .into_iter()
            .map(|block| block.text)
            .find(|text| !text.trim().is_empty())
            .ok_or_else(|| ModelError::new(ModelErrorKind::EmptyResponse))?;

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
