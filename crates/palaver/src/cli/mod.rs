//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! palaver binary.

mod ask;
mod chat;
mod commands;
mod history;

pub use ask::run_ask;
pub use chat::launch_chat;
pub use commands::{Cli, Commands, HistoryCommands};
pub use history::handle_history_command;

use palaver_core::ClientConfig;
use palaver_error::PalaverResult;

/// Build the client configuration from the environment plus CLI overrides.
pub fn build_config(
    model: Option<String>,
    system_prompt: Option<String>,
) -> PalaverResult<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(prompt) = system_prompt {
        config.system_prompt = prompt;
    }
    Ok(config)
}
