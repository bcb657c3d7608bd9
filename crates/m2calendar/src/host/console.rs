//! Terminal fallback used when no embedding host is present.

use std::io::IsTerminal;

use async_trait::async_trait;
use dialoguer::Confirm;

use m2calendar_core::host::{HostError, NotificationHost, NotificationKind, Result};

/// Shows messages on stderr and asks confirmations with a terminal prompt.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleHost {
    interactive: bool,
    default_answer: bool,
}

impl ConsoleHost {
    /// Prompts only when stdin is a terminal; otherwise answers `default_answer`.
    pub fn new(default_answer: bool) -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
            default_answer,
        }
    }

    /// Never prompts; every confirmation answers `default_answer`.
    pub fn non_interactive(default_answer: bool) -> Self {
        Self {
            interactive: false,
            default_answer,
        }
    }

    async fn prompt(&self, message: &str) -> Result<bool> {
        let prompt = message.to_string();
        let default = self.default_answer;

        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(default)
                .interact()
        })
        .await
        .map_err(|e| HostError::Dialog(format!("Prompt task failed: {e}")))?
        .map_err(|e| HostError::Dialog(format!("Failed to get user input: {e}")))
    }
}

/// Prefix shown before a message of the given kind.
pub fn message_prefix(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "ℹ",
        NotificationKind::Success => "✓",
        NotificationKind::Error => "✗",
    }
}

#[async_trait]
impl NotificationHost for ConsoleHost {
    async fn show_message(&self, message: &str, kind: NotificationKind) {
        eprintln!("{} {}", message_prefix(kind), message);
    }

    async fn confirm(&self, message: &str) -> bool {
        if !self.interactive {
            tracing::info!(
                answer = self.default_answer,
                "No terminal to confirm \"{message}\", using default"
            );
            return self.default_answer;
        }

        match self.prompt(message).await {
            Ok(confirmed) => confirmed,
            Err(error) => {
                tracing::warn!(error = %error, "Confirmation failed, treating as declined");
                false
            }
        }
    }
}
