//! Error types for the Palaver chat client.
//!
//! This crate provides the foundation error types used across the Palaver
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use palaver_error::{PalaverResult, ConfigError};
//!
//! fn load_key() -> PalaverResult<String> {
//!     Err(ConfigError::new("GROQ_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod history;
mod tui;

pub use client::{ClientError, ClientErrorKind, ClientResult};
pub use config::ConfigError;
pub use error::{PalaverError, PalaverErrorKind, PalaverResult};
pub use history::{HistoryError, HistoryErrorKind, HistoryResult};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
