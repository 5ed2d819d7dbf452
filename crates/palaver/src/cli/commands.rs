//! CLI command definitions.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Palaver - terminal chat client for OpenAI-compatible completion endpoints
#[derive(Parser, Debug)]
#[command(name = "palaver")]
#[command(about = "Terminal chat client for OpenAI-compatible completion endpoints", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute; defaults to the chat interface
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Override the configured system prompt
    #[arg(long, global = true)]
    pub system_prompt: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the chat interface
    Chat,

    /// Send a single prompt and print the reply
    Ask {
        /// The prompt to send
        prompt: String,
    },

    /// Chat history commands
    #[command(subcommand)]
    History(HistoryCommands),
}

/// Chat history subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List saved chats
    List {
        /// Maximum number of chats to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show a saved chat
    Show {
        /// Id of the chat
        id: Uuid,
    },

    /// Delete a saved chat
    Delete {
        /// Id of the chat
        id: Uuid,
    },
}
