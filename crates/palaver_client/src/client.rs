//! The completion client.

use crate::{CompletionBody, CompletionReply, ErrorBody};
use async_trait::async_trait;
use palaver_core::{ChatRequest, ChatResponse, ClientConfig, CompletionDriver};
use palaver_error::{ClientError, ClientErrorKind, ClientResult, PalaverResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for an OpenAI-compatible chat-completion endpoint.
///
/// Stateless from the caller's perspective: one request per call, no
/// retries, a single failed attempt surfaced immediately.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
    config: ClientConfig,
}

impl CompletionClient {
    /// Creates a new completion client from a configuration.
    pub fn new(config: ClientConfig) -> Self {
        debug!(model = %config.model, "Creating completion client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GROQ_API_KEY` is not set.
    pub fn from_env() -> PalaverResult<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Converts a chat request into the wire body, filling unset parameters
    /// from the configuration.
    pub fn build_body(&self, request: &ChatRequest) -> ClientResult<CompletionBody> {
        if request.messages.is_empty() {
            return Err(ClientError::new(ClientErrorKind::InvalidRequest(
                "message list is empty".to_string(),
            )));
        }

        Ok(CompletionBody {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages.clone(),
            temperature: request.temperature.unwrap_or(self.config.temperature),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            stream: false,
        })
    }

    /// Sends one request to the completion endpoint.
    #[instrument(skip(self, body), fields(model = %body.model, messages = body.messages.len()))]
    pub async fn send(&self, body: &CompletionBody) -> ClientResult<CompletionReply> {
        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Sending request to completion endpoint");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach completion endpoint");
                ClientError::new(ClientErrorKind::Connectivity(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            // Prefer the provider's error.message when the body parses
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or(text);
            error!(status, message = %message, "Completion endpoint returned error");
            return Err(ClientError::new(ClientErrorKind::Api { status, message }));
        }

        let reply: CompletionReply = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse completion response");
            ClientError::new(ClientErrorKind::MalformedResponse(e.to_string()))
        })?;

        debug!(choices = reply.choices.len(), "Received completion response");
        Ok(reply)
    }

    /// Extracts the reply text from the first choice.
    ///
    /// Zero choices is a failure, never an empty success.
    fn extract_reply(reply: CompletionReply) -> ClientResult<ChatResponse> {
        match reply.choices.into_iter().next() {
            Some(choice) => Ok(ChatResponse::new(choice.message.content)),
            None => Err(ClientError::new(ClientErrorKind::EmptyResponse)),
        }
    }
}

#[async_trait]
impl CompletionDriver for CompletionClient {
    #[instrument(skip(self, request), fields(provider = "groq", model = %self.config.model))]
    async fn complete(&self, request: &ChatRequest) -> PalaverResult<ChatResponse> {
        let body = self.build_body(request)?;
        let reply = self.send(&body).await?;
        Ok(Self::extract_reply(reply)?)
    }

    fn provider_name(&self) -> &'static str {
        "groq"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
