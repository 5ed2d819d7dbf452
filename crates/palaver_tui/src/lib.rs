//! Terminal chat interface for Palaver.
//!
//! Provides an interactive chat thread with a sidebar of saved
//! conversations, suggestion prompts for empty chats, and code-fence-aware
//! rendering of assistant replies. Built with ratatui for terminal
//! rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod fence;
mod runner;
mod ui;

pub use app::{App, CompletionOutcome, Focus, SUGGESTIONS};
pub use events::{Event, EventHandler};
pub use fence::{Segment, split_fences};
pub use runner::run_tui;
