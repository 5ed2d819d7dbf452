//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The sender of a message in a conversation.
///
/// Serializes lowercase (`"system"`, `"user"`, `"assistant"`) to match both
/// the completion endpoint's wire format and the on-disk history format.
///
/// # Examples
///
/// ```
/// use palaver_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the model
    Assistant,
}
