use async_trait::async_trait;
use uuid::Uuid;

use crate::calendar::{Event, NewEvent};

use super::Result;

/// Where events are loaded from and where changes are sent.
///
/// The lifecycle controller talks only to this trait, so a local mock and a
/// remote API are interchangeable.
#[async_trait]
pub trait EventBackend: Send + Sync {
    /// Lists all events visible to the user.
    async fn list_events(&self, user_id: &str) -> Result<Vec<Event>>;

    /// Creates an event; the backend assigns its identity and creation time.
    async fn create_event(&self, user_id: &str, event: &NewEvent) -> Result<Event>;

    /// Replaces an existing event.
    async fn update_event(&self, event: &Event) -> Result<Event>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, id: Uuid) -> Result<()>;
}
