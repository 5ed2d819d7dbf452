//! Request and response types for chat completion.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A completion request: an ordered conversation plus generation parameters.
///
/// Constructed per user turn, sent once, and discarded after the response
/// (or error) is consumed. Parameters left `None` fall back to the client's
/// configured values.
///
/// # Examples
///
/// ```
/// use palaver_core::{ChatRequest, Message, Role};
///
/// let request = ChatRequest {
///     messages: vec![Message::user("Hello!")],
///     model: Some("llama-3.3-70b-versatile".to_string()),
///     temperature: Some(0.7),
///     max_tokens: Some(2048),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(2048));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Model identifier to use
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request from a message list, deferring parameters to the
    /// client configuration.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }
}

/// The reply extracted from the first returned choice.
///
/// # Examples
///
/// ```
/// use palaver_core::ChatResponse;
///
/// let response = ChatResponse::new("Hello! How can I help?");
/// assert_eq!(response.reply, "Hello! How can I help?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated reply text
    pub reply: String,
}

impl ChatResponse {
    /// Create a response from reply text.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
