//! Local chat history persistence for Palaver.
//!
//! Conversations persist as a single JSON document, newest chat first,
//! written atomically via temp file + rename.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::HistoryStore;
