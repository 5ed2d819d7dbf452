//! Persisted conversation types.

use crate::{Message, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length before truncation.
const TITLE_MAX: usize = 50;

/// Derive a chat title from the first user message.
///
/// Truncates to 50 characters with a `...` suffix, on a character boundary.
///
/// # Examples
///
/// ```
/// use palaver_core::title_from;
///
/// assert_eq!(title_from("Hello"), "Hello");
/// let long = "x".repeat(60);
/// assert_eq!(title_from(&long).len(), 53);
/// ```
pub fn title_from(first_message: &str) -> String {
    let truncated: String = first_message.chars().take(TITLE_MAX).collect();
    if first_message.chars().count() > TITLE_MAX {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

/// A single recorded message within a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// The role of the sender
    pub role: Role,
    /// The text content
    pub content: String,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    /// Record a new entry now.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A persisted conversation.
///
/// # Examples
///
/// ```
/// use palaver_core::{Chat, Role};
///
/// let chat = Chat::new("What is ownership in Rust?");
/// assert_eq!(chat.title, "What is ownership in Rust?");
/// assert_eq!(chat.entries.len(), 1);
/// assert_eq!(chat.entries[0].role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique identifier
    pub id: Uuid,
    /// Display title, derived from the first user message
    pub title: String,
    /// Ordered conversation entries
    pub entries: Vec<ChatEntry>,
    /// When the chat was created
    pub created: DateTime<Utc>,
}

impl Chat {
    /// Start a new chat from the first user message.
    pub fn new(first_message: impl Into<String>) -> Self {
        let content = first_message.into();
        Self {
            id: Uuid::new_v4(),
            title: title_from(&content),
            entries: vec![ChatEntry::new(Role::User, content)],
            created: Utc::now(),
        }
    }

    /// Start a new chat with no messages yet.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "New Chat".to_string(),
            entries: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Append an entry, titling the chat if this is its first user message.
    pub fn push(&mut self, entry: ChatEntry) {
        if self.entries.is_empty() && entry.role == Role::User {
            self.title = title_from(&entry.content);
        }
        self.entries.push(entry);
    }

    /// Build the message list for a completion request: the system prompt
    /// followed by the conversation in order.
    pub fn to_messages(&self, system_prompt: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.entries.len() + 1);
        messages.push(Message::system(system_prompt));
        messages.extend(
            self.entries
                .iter()
                .map(|e| Message::new(e.role, e.content.clone())),
        );
        messages
    }
}
