//! Filesystem-backed chat history store.

use palaver_core::{Chat, ChatEntry};
use palaver_error::{HistoryError, HistoryErrorKind, HistoryResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const HISTORY_FILE: &str = "chats.json";

/// Chat history store backed by a JSON file.
///
/// The chat list is ordered newest first. Writes are atomic: the document is
/// written to a temp file in the same directory and renamed over the target,
/// so a crash mid-write never leaves a truncated history.
///
/// # Examples
///
/// ```no_run
/// use palaver_history::HistoryStore;
///
/// let store = HistoryStore::open_default()?;
/// let chats = store.load()?;
/// # Ok::<(), palaver_error::HistoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(dir))]
    pub fn new(dir: impl Into<PathBuf>) -> HistoryResult<Self> {
        let dir = dir.into();

        std::fs::create_dir_all(&dir).map_err(|e| {
            HistoryError::new(HistoryErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        tracing::debug!(path = %dir.display(), "Opened history store");
        Ok(Self {
            path: dir.join(HISTORY_FILE),
        })
    }

    /// Create a store in the platform data directory.
    pub fn open_default() -> HistoryResult<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            HistoryError::new(HistoryErrorKind::DirectoryCreation(
                "no platform data directory".to_string(),
            ))
        })?;
        Self::new(base.join("palaver"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the chat list. A missing file is an empty history; a corrupt
    /// file is an error, never a silent reset.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> HistoryResult<Vec<Chat>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(HistoryError::new(HistoryErrorKind::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                ))));
            }
        };

        serde_json::from_str(&text)
            .map_err(|e| HistoryError::new(HistoryErrorKind::Serde(e.to_string())))
    }

    /// Persist the chat list atomically.
    #[tracing::instrument(skip(self, chats), fields(chats = chats.len()))]
    pub fn save(&self, chats: &[Chat]) -> HistoryResult<()> {
        let text = serde_json::to_string_pretty(chats)
            .map_err(|e| HistoryError::new(HistoryErrorKind::Serde(e.to_string())))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, text).map_err(|e| {
            HistoryError::new(HistoryErrorKind::Write(format!("{}: {}", tmp.display(), e)))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            HistoryError::new(HistoryErrorKind::Write(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %self.path.display(), "Saved chat history");
        Ok(())
    }

    /// Start a new chat from its first user message and prepend it.
    pub fn create_chat(&self, first_message: &str) -> HistoryResult<Chat> {
        let mut chats = self.load()?;
        let chat = Chat::new(first_message);
        chats.insert(0, chat.clone());
        self.save(&chats)?;
        Ok(chat)
    }

    /// Append an entry to an existing chat.
    ///
    /// # Errors
    ///
    /// Returns `ChatNotFound` if no chat has the given id.
    pub fn append_entry(&self, chat_id: Uuid, entry: ChatEntry) -> HistoryResult<()> {
        let mut chats = self.load()?;
        let chat = chats.iter_mut().find(|c| c.id == chat_id).ok_or_else(|| {
            HistoryError::new(HistoryErrorKind::ChatNotFound(chat_id.to_string()))
        })?;
        chat.push(entry);
        self.save(&chats)
    }

    /// Find a chat by id.
    pub fn find(&self, chat_id: Uuid) -> HistoryResult<Chat> {
        self.load()?
            .into_iter()
            .find(|c| c.id == chat_id)
            .ok_or_else(|| HistoryError::new(HistoryErrorKind::ChatNotFound(chat_id.to_string())))
    }

    /// Delete a chat by id.
    ///
    /// # Errors
    ///
    /// Returns `ChatNotFound` if no chat has the given id.
    pub fn delete_chat(&self, chat_id: Uuid) -> HistoryResult<()> {
        let mut chats = self.load()?;
        let before = chats.len();
        chats.retain(|c| c.id != chat_id);
        if chats.len() == before {
            return Err(HistoryError::new(HistoryErrorKind::ChatNotFound(
                chat_id.to_string(),
            )));
        }
        self.save(&chats)
    }
}
