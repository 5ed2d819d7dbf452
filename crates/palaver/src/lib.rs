//! Palaver: a terminal chat client for OpenAI-compatible completion
//! endpoints.
//!
//! This facade re-exports the workspace crates behind a single dependency:
//!
//! - [`palaver_core`] — messages, chats, configuration, the driver trait
//! - [`palaver_client`] — the completion client
//! - [`palaver_history`] — local chat persistence
//! - [`palaver_tui`] — the terminal interface
//! - [`palaver_error`] — the error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use palaver_client::CompletionClient;
pub use palaver_core::{
    Chat, ChatEntry, ChatRequest, ChatResponse, ClientConfig, CompletionDriver, Message, Role,
};
pub use palaver_error::{
    ClientError, ClientErrorKind, ConfigError, HistoryError, HistoryErrorKind, PalaverError,
    PalaverErrorKind, PalaverResult,
};
pub use palaver_history::HistoryStore;
pub use palaver_tui::run_tui;
