//! Chat history persistence errors.

/// History store error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HistoryErrorKind {
    /// Failed to create the history directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),

    /// Failed to read the history file
    #[display("Failed to read history: {}", _0)]
    Read(String),

    /// Failed to write the history file
    #[display("Failed to write history: {}", _0)]
    Write(String),

    /// History file contents could not be decoded
    #[display("Corrupt history file: {}", _0)]
    Serde(String),

    /// No chat with the given id
    #[display("Chat not found: {}", _0)]
    ChatNotFound(String),
}

/// History error with source location tracking.
///
/// # Examples
///
/// ```
/// use palaver_error::{HistoryError, HistoryErrorKind};
///
/// let err = HistoryError::new(HistoryErrorKind::ChatNotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("Chat not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("History Error: {} at {}:{}", kind, file, line)]
pub struct HistoryError {
    /// The specific error kind
    pub kind: HistoryErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl HistoryError {
    /// Create a new history error.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HistoryErrorKind {
        &self.kind
    }
}

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
