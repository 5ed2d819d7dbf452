//! Chat history command handlers.

use crate::cli::HistoryCommands;
use palaver_error::PalaverResult;
use palaver_history::HistoryStore;

/// Handle a `history` subcommand.
pub fn handle_history_command(command: HistoryCommands) -> PalaverResult<()> {
    let store = HistoryStore::open_default()?;

    match command {
        HistoryCommands::List { limit } => {
            let chats = store.load()?;
            if chats.is_empty() {
                println!("No saved chats.");
                return Ok(());
            }
            for chat in chats.iter().take(limit) {
                println!(
                    "{}  {}  [{} messages]  {}",
                    chat.id,
                    chat.created.format("%Y-%m-%d %H:%M"),
                    chat.entries.len(),
                    chat.title
                );
            }
        }

        HistoryCommands::Show { id } => {
            let chat = store.find(id)?;
            println!("{} ({})", chat.title, chat.created.format("%Y-%m-%d %H:%M"));
            for entry in &chat.entries {
                println!();
                println!("[{}] {}", entry.role, entry.content);
            }
        }

        HistoryCommands::Delete { id } => {
            store.delete_chat(id)?;
            println!("Deleted chat {}", id);
        }
    }

    Ok(())
}
