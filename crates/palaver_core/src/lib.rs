//! Core data types for the Palaver chat client.
//!
//! This crate provides the foundation data types shared by the completion
//! client, the history store, and the terminal interface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod config;
mod driver;
mod message;
mod request;
mod role;

pub use chat::{Chat, ChatEntry, title_from};
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
};
pub use driver::CompletionDriver;
pub use message::Message;
pub use request::{ChatRequest, ChatResponse};
pub use role::Role;
