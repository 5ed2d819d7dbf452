//! Top-level error wrapper types.

use crate::{ClientError, ConfigError, HistoryError, TuiError};

/// The foundation error enum, one variant per workspace concern.
///
/// # Examples
///
/// ```
/// use palaver_error::{PalaverError, ConfigError};
///
/// let cfg_err = ConfigError::new("missing api key");
/// let err: PalaverError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PalaverErrorKind {
    /// Completion client error
    #[from(ClientError)]
    Client(ClientError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat history persistence error
    #[from(HistoryError)]
    History(HistoryError),
    /// Terminal interface error
    #[from(TuiError)]
    Tui(TuiError),
}

/// Palaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use palaver_error::{PalaverResult, ConfigError};
///
/// fn might_fail() -> PalaverResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Palaver Error: {}", _0)]
pub struct PalaverError(Box<PalaverErrorKind>);

impl PalaverError {
    /// Create a new error from a kind.
    pub fn new(kind: PalaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PalaverErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PalaverErrorKind
impl<T> From<T> for PalaverError
where
    T: Into<PalaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Palaver operations.
///
/// # Examples
///
/// ```
/// use palaver_error::{PalaverResult, ConfigError};
///
/// fn load() -> PalaverResult<String> {
///     Err(ConfigError::new("not configured"))?
/// }
/// ```
pub type PalaverResult<T> = std::result::Result<T, PalaverError>;
