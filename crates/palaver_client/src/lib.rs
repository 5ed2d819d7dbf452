//! OpenAI-compatible completion client for Palaver.
//!
//! This crate wraps a single request/response operation: serialize an
//! ordered message list to JSON, POST it to a `/chat/completions` endpoint
//! with a bearer token, and extract the first choice's reply text. Failures
//! surface through a four-way taxonomy (connectivity, provider, malformed
//! response, empty result) so the interface can report each distinctly.
//!
//! # Example
//!
//! ```no_run
//! use palaver_client::CompletionClient;
//! use palaver_core::{ChatRequest, CompletionDriver, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CompletionClient::from_env()?;
//! let request = ChatRequest::new(vec![Message::user("Hello")]);
//! let response = client.complete(&request).await?;
//! println!("{}", response.reply);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod wire;

pub use client::CompletionClient;
pub use wire::{ApiError, Choice, ChoiceMessage, CompletionBody, CompletionReply, ErrorBody};
