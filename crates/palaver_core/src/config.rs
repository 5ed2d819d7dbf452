//! Client configuration.
//!
//! The model identifier and system prompt are deliberately configuration
//! rather than constants: both vary across deployments of the same endpoint.

use derive_builder::Builder;
use palaver_error::{ConfigError, PalaverResult};

/// Default completion endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default system prompt prepended to every conversation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. When providing code \
     examples, always wrap them in triple backticks (```) for proper formatting.";

/// Configuration for the completion client.
///
/// # Examples
///
/// ```
/// use palaver_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .api_key("key")
///     .model("llama-3.1-8b-instant")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model, "llama-3.1-8b-instant");
/// assert_eq!(config.temperature, 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// Bearer token authorizing requests to the completion endpoint
    pub api_key: String,
    /// Base URL of the OpenAI-compatible endpoint
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    pub model: String,
    /// Sampling temperature
    #[builder(default = "0.7")]
    pub temperature: f32,
    /// Maximum tokens to generate per reply
    #[builder(default = "2048")]
    pub max_tokens: u32,
    /// System prompt prepended to every conversation
    #[builder(default = "DEFAULT_SYSTEM_PROMPT.to_string()")]
    pub system_prompt: String,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment.
    ///
    /// Reads the API token from `GROQ_API_KEY`, with optional overrides
    /// `PALAVER_BASE_URL`, `PALAVER_MODEL`, and `PALAVER_SYSTEM_PROMPT`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GROQ_API_KEY` is not set.
    pub fn from_env() -> PalaverResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|e| ConfigError::new(format!("GROQ_API_KEY not set: {}", e)))?;

        let mut builder = Self::builder();
        builder.api_key(api_key);
        if let Ok(base_url) = std::env::var("PALAVER_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Ok(model) = std::env::var("PALAVER_MODEL") {
            builder.model(model);
        }
        if let Ok(prompt) = std::env::var("PALAVER_SYSTEM_PROMPT") {
            builder.system_prompt(prompt);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }
}
