//! Completion client errors.

/// Completion client error conditions.
///
/// Each variant is a distinct, user-visible failure class: a send that
/// never reached the server, a non-success status from the provider, a
/// body that could not be decoded, and a decoded body with no choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// Request never reached the server (connect, DNS, or timeout failure)
    #[display("network error: unable to connect ({})", _0)]
    Connectivity(String),

    /// Provider responded with a non-success HTTP status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Provider-supplied error message, or the raw body when none parses
        message: String,
    },

    /// Response body was not valid JSON or lacked the expected shape
    #[display("unexpected response: {}", _0)]
    MalformedResponse(String),

    /// Provider returned zero choices
    #[display("no response received")]
    EmptyResponse,

    /// Request could not be constructed
    #[display("invalid request: {}", _0)]
    InvalidRequest(String),
}

/// Completion client error with source location tracking.
///
/// # Examples
///
/// ```
/// use palaver_error::{ClientError, ClientErrorKind};
///
/// let err = ClientError::new(ClientErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no response received"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at {}:{}", kind, file, line)]
pub struct ClientError {
    /// The specific error kind
    pub kind: ClientErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClientErrorKind {
        &self.kind
    }
}

/// Result type for completion client operations.
pub type ClientResult<T> = Result<T, ClientError>;
