use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{DomainError, ProviderConfig};

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible `/chat/completions` endpoints
/// (Perplexity by default).
///
/// Sends one request per call with bearer auth and the configured timeout.
/// No retries and no streaming.
pub struct OpenAiCompatibleClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + `/chat/completions`).
    url: String,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key().unwrap_or_default().to_string(),
            model: config.model().to_string(),
            url: config.chat_completions_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pull the first choice's text out of a raw response body.
    fn parse_completion(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::invalid_response(format!("failed to parse completion response: {e}"))
        })?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::invalid_response("completion response has no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| DomainError::invalid_response("first choice has no message content"))
    }
}

#[async_trait]
impl ChatClient for OpenAiCompatibleClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: [
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("POST {} (model={})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::provider(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!("Provider returned {status}: {body}");
            return Err(DomainError::provider(format!("{status}: {body}")));
        }

        Self::parse_completion(&body)
    }
}
