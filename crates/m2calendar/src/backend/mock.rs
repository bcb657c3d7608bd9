//! Local mock backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use m2calendar_core::backend::{BackendError, EventBackend, Result};
use m2calendar_core::calendar::{sample_events, Event, NewEvent};

/// In-process backend standing in for the events API.
///
/// Holds events in an `Arc<RwLock<_>>`, assigns identities and timestamps on
/// create, and optionally sleeps before listing to mimic network latency.
/// Data is not persisted and is lost when the backend is dropped.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    events: Arc<RwLock<Vec<Event>>>,
    latency: Duration,
}

impl MockBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding the given events.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
            latency: Duration::ZERO,
        }
    }

    /// Creates a backend seeded with the sample agenda around `today`.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        Self::with_events(sample_events(today))
    }

    /// Sets the simulated latency applied to listing.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl EventBackend for MockBackend {
    async fn list_events(&self, user_id: &str) -> Result<Vec<Event>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let events = self.events.read().await;
        tracing::debug!(user_id, count = events.len(), "Listing mock events");
        Ok(events.clone())
    }

    async fn create_event(&self, user_id: &str, event: &NewEvent) -> Result<Event> {
        let created = event.clone().into_event();
        tracing::debug!(user_id, id = %created.id, "Creating mock event");
        self.events.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_event(&self, event: &Event) -> Result<Event> {
        let mut events = self.events.write().await;
        let slot = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| BackendError::NotFound(event.id.to_string()))?;
        *slot = event.clone();
        Ok(event.clone())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        let position = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        events.remove(position);
        Ok(())
    }
}
