use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Tone of a user-facing message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

/// The capabilities the calendar needs from whatever hosts it: showing a
/// message and asking a yes/no question.
///
/// Both operations are async regardless of whether the implementation
/// answers immediately or waits on the host. Implementations handle their
/// own fallbacks, so neither operation fails.
#[async_trait]
pub trait NotificationHost: Send + Sync {
    /// Shows a message to the user.
    async fn show_message(&self, message: &str, kind: NotificationKind);

    /// Asks the user to confirm; `false` means declined.
    async fn confirm(&self, message: &str) -> bool;
}
