//! Application state for the chat interface.

use palaver_core::{Chat, ChatEntry, Role};
use uuid::Uuid;

/// Suggestion prompts shown when the current chat has no messages.
pub const SUGGESTIONS: [&str; 6] = [
    "Write a Rust function to sort a vector of structs",
    "Explain how async/await works in Rust",
    "Create a Python function to sort an array",
    "Help me debug a lifetime error",
    "Generate a CSS animation for a loading spinner",
    "Write a SQL query to find duplicate records",
];

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Focus {
    /// The chat list sidebar
    Sidebar,
    /// The message input box
    Input,
}

/// The settled result of a completion request, tagged with its chat so a
/// reply for a chat deleted meanwhile can be dropped.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// The chat the request belonged to
    pub chat_id: Uuid,
    /// Reply text, or a display-ready failure notice
    pub result: Result<String, String>,
}

/// Main application state.
pub struct App {
    /// Saved chats, newest first
    pub chats: Vec<Chat>,
    /// Selected index in the chat list; also the current chat
    pub selected: usize,
    /// Whether the sidebar is shown
    pub sidebar_visible: bool,
    /// Which pane has focus
    pub focus: Focus,
    /// The message being composed
    pub input: String,
    /// Chat id of the in-flight request, if any
    pub pending: Option<Uuid>,
    /// Transient notice shown in the status bar
    pub status_message: String,
    /// Lines scrolled up from the bottom of the thread
    pub scroll_up: u16,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create the app over a loaded chat list.
    pub fn new(chats: Vec<Chat>) -> Self {
        Self {
            chats,
            selected: 0,
            sidebar_visible: true,
            focus: Focus::Input,
            input: String::new(),
            pending: None,
            status_message: String::from("Enter sends. Ctrl+N new chat. Esc quits."),
            scroll_up: 0,
            should_quit: false,
        }
    }

    /// The currently selected chat, if any exist.
    pub fn current_chat(&self) -> Option<&Chat> {
        self.chats.get(self.selected)
    }

    /// Whether a new message may be submitted right now.
    ///
    /// One outstanding request at a time: submission stays disabled until
    /// the in-flight request settles.
    pub fn can_submit(&self) -> bool {
        self.pending.is_none()
    }

    /// Move the sidebar selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll_up = 0;
        }
    }

    /// Move the sidebar selection down.
    pub fn select_next(&mut self) {
        if self.selected < self.chats.len().saturating_sub(1) {
            self.selected += 1;
            self.scroll_up = 0;
        }
    }

    /// Start a fresh chat and select it.
    pub fn new_chat(&mut self) {
        self.chats.insert(0, Chat::empty());
        self.selected = 0;
        self.scroll_up = 0;
        self.focus = Focus::Input;
    }

    /// Delete the selected chat, returning its id.
    ///
    /// A pending request for the deleted chat is left to settle; its result
    /// is dropped when it arrives.
    pub fn delete_selected(&mut self) -> Option<Uuid> {
        if self.chats.is_empty() {
            return None;
        }
        let removed = self.chats.remove(self.selected);
        if self.selected >= self.chats.len() && self.selected > 0 {
            self.selected -= 1;
        }
        self.scroll_up = 0;
        Some(removed.id)
    }

    /// Record the composed message as a user entry and mark its chat as
    /// having a request in flight. Returns the chat id to complete against,
    /// or `None` when there is nothing to send or a request is already
    /// pending.
    pub fn submit(&mut self) -> Option<Uuid> {
        let content = self.input.trim().to_string();
        if content.is_empty() || !self.can_submit() {
            return None;
        }
        self.send_text(content)
    }

    /// Send one of the suggestion prompts (1-based), valid only while the
    /// current chat is empty.
    pub fn submit_suggestion(&mut self, n: usize) -> Option<Uuid> {
        if !self.can_submit() || !self.showing_suggestions() {
            return None;
        }
        let prompt = SUGGESTIONS.get(n.checked_sub(1)?)?;
        self.send_text(prompt.to_string())
    }

    /// Whether the suggestion panel is showing (no messages in the current
    /// chat, or no chat yet).
    pub fn showing_suggestions(&self) -> bool {
        self.current_chat().is_none_or(|c| c.entries.is_empty())
    }

    fn send_text(&mut self, content: String) -> Option<Uuid> {
        if self.chats.is_empty() {
            self.chats.push(Chat::empty());
            self.selected = 0;
        }
        let chat = &mut self.chats[self.selected];
        chat.push(ChatEntry::new(Role::User, content));
        let id = chat.id;

        self.input.clear();
        self.pending = Some(id);
        self.status_message = String::from("thinking...");
        self.scroll_up = 0;
        Some(id)
    }

    /// Apply a settled completion result.
    ///
    /// On success the assistant entry is appended to its chat; if that chat
    /// was deleted meanwhile the reply is dropped. On failure the notice
    /// goes to the status bar and the conversation is left exactly as it
    /// was, the user's message included.
    pub fn apply_outcome(&mut self, outcome: CompletionOutcome) {
        if self.pending == Some(outcome.chat_id) {
            self.pending = None;
        }
        match outcome.result {
            Ok(reply) => {
                if let Some(chat) = self.chats.iter_mut().find(|c| c.id == outcome.chat_id) {
                    chat.push(ChatEntry::new(Role::Assistant, reply));
                    self.status_message.clear();
                } else {
                    tracing::debug!(chat_id = %outcome.chat_id, "Dropping reply for deleted chat");
                }
            }
            Err(notice) => {
                self.status_message = notice;
            }
        }
    }

    /// Scroll the thread up.
    pub fn scroll_thread_up(&mut self) {
        self.scroll_up = self.scroll_up.saturating_add(3);
    }

    /// Scroll the thread back toward the bottom.
    pub fn scroll_thread_down(&mut self) {
        self.scroll_up = self.scroll_up.saturating_sub(3);
    }

    /// Toggle focus between sidebar and input.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Input,
            Focus::Input => Focus::Sidebar,
        };
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
