//! Scripted notification host for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use m2calendar_core::host::{NotificationHost, NotificationKind};

/// Records every message and confirmation and answers confirmations with a
/// fixed reply.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    answer: bool,
    messages: Mutex<Vec<(String, NotificationKind)>>,
    confirmations: Mutex<Vec<String>>,
}

impl ScriptedHost {
    pub fn confirming() -> Self {
        Self {
            answer: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn last_message(&self) -> Option<(String, NotificationKind)> {
        self.messages.lock().unwrap().last().cloned()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationHost for ScriptedHost {
    async fn show_message(&self, message: &str, kind: NotificationKind) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), kind));
    }

    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.lock().unwrap().push(message.to_string());
        self.answer
    }
}
