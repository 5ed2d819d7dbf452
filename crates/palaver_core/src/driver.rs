//! Trait definition for completion backends.

use crate::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use palaver_error::PalaverResult;

/// Core trait that completion backends implement.
///
/// One stateless request/response operation: callers invoke it serially, one
/// outstanding request at a time. The interface and the tests substitute
/// mock implementations through this trait.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send a conversation and return the generated reply.
    async fn complete(&self, req: &ChatRequest) -> PalaverResult<ChatResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama-3.3-70b-versatile").
    fn model_name(&self) -> &str;
}
