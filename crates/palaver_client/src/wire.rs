//! Wire types for the OpenAI-compatible chat-completion contract.

use palaver_core::Message;
use serde::{Deserialize, Serialize};

/// Request body for `POST {base}/chat/completions`.
///
/// `Message` already serializes as `{role, content}` with lowercase roles,
/// so the message list goes on the wire unchanged.
///
/// # Examples
///
/// ```
/// use palaver_client::CompletionBody;
/// use palaver_core::Message;
///
/// let body = CompletionBody {
///     model: "llama-3.3-70b-versatile".to_string(),
///     messages: vec![Message::user("Hi")],
///     temperature: 0.7,
///     max_tokens: 2048,
///     stream: false,
/// };
///
/// let json = serde_json::to_value(&body).unwrap();
/// assert_eq!(json["messages"][0]["role"], "user");
/// assert_eq!(json["stream"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionBody {
    /// Model identifier
    pub model: String,
    /// Ordered conversation messages
    pub messages: Vec<Message>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Streaming flag, always false
    pub stream: bool,
}

/// Success response body.
///
/// A body missing the `choices` field fails deserialization and is surfaced
/// as a malformed response; an empty `choices` array is the distinct
/// empty-result failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReply {
    /// Candidate replies; the first is the one used
    pub choices: Vec<Choice>,
}

/// One candidate reply returned by the completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: ChoiceMessage,
}

/// The message inside a choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text content
    pub content: String,
    /// Role of the generated message, normally "assistant"
    pub role: String,
}

/// Error response body, sent by the provider alongside non-success statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The provider-supplied error detail
    pub error: ApiError,
}

/// Provider-supplied error detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
    /// Provider error classification
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
