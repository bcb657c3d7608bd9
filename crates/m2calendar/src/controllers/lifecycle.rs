use std::sync::Arc;

use uuid::Uuid;

use m2calendar_core::backend::EventBackend;
use m2calendar_core::calendar::{validate_form, Event, EventForm};
use m2calendar_core::host::{NotificationHost, NotificationKind};
use m2calendar_core::store::EventStore;

use crate::error::{LifecycleError, Result};

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Event),
    /// The user declined the confirmation; nothing changed.
    Cancelled,
}

/// Validates and applies create, edit and delete against the store.
///
/// Each operation goes through the backend first and only touches the
/// store once the backend accepted it. Failures are shown to the user
/// through the host and returned to the caller; nothing is retried.
pub struct EventLifecycleController {
    host: Arc<dyn NotificationHost>,
    backend: Arc<dyn EventBackend>,
    user_id: String,
}

impl EventLifecycleController {
    pub fn new(
        host: Arc<dyn NotificationHost>,
        backend: Arc<dyn EventBackend>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            host,
            backend,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Creates an event from a submitted form.
    pub async fn submit(&self, store: &mut EventStore, form: &EventForm) -> Result<Event> {
        let payload = match validate_form(form) {
            Ok(payload) => payload,
            Err(error) => return Err(self.report(error.into()).await),
        };

        let event = match self.backend.create_event(&self.user_id, &payload).await {
            Ok(event) => event,
            Err(error) => return Err(self.report(error.into()).await),
        };

        store.upsert(event.clone());
        tracing::info!(id = %event.id, date = %event.date, "Event created");
        self.host
            .show_message("Event created!", NotificationKind::Success)
            .await;
        Ok(event)
    }

    /// Returns the editable form for an existing event.
    pub async fn edit(&self, store: &EventStore, id: Uuid) -> Result<EventForm> {
        match store.get(id) {
            Some(event) => Ok(EventForm::from_event(&event)),
            None => Err(self.report(LifecycleError::NotFound(id)).await),
        }
    }

    /// Applies an edited form to the event with the given identity.
    ///
    /// Identity and creation time are kept; a changed date moves the event
    /// to its new date bucket.
    pub async fn confirm_edit(
        &self,
        store: &mut EventStore,
        id: Uuid,
        form: &EventForm,
    ) -> Result<Event> {
        let Some(mut event) = store.get(id) else {
            return Err(self.report(LifecycleError::NotFound(id)).await);
        };

        match validate_form(form) {
            Ok(payload) => payload.apply_to(&mut event),
            Err(error) => return Err(self.report(error.into()).await),
        }

        let updated = match self.backend.update_event(&event).await {
            Ok(updated) => updated,
            Err(error) => return Err(self.report(error.into()).await),
        };

        let outcome = store.upsert(updated.clone());
        tracing::info!(id = %updated.id, date = %updated.date, ?outcome, "Event updated");
        self.host
            .show_message("Event updated!", NotificationKind::Success)
            .await;
        Ok(updated)
    }

    /// Deletes an event after the user confirms.
    pub async fn delete(&self, store: &mut EventStore, id: Uuid) -> Result<DeleteOutcome> {
        if !store.contains(id) {
            return Err(self.report(LifecycleError::NotFound(id)).await);
        }

        if !self.host.confirm("Delete event?").await {
            tracing::debug!(%id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(error) = self.backend.delete_event(id).await {
            return Err(self.report(error.into()).await);
        }

        match store.remove(id) {
            Some(event) => {
                tracing::info!(%id, date = %event.date, "Event deleted");
                self.host
                    .show_message("Event deleted!", NotificationKind::Success)
                    .await;
                Ok(DeleteOutcome::Deleted(event))
            }
            None => Err(self.report(LifecycleError::NotFound(id)).await),
        }
    }

    /// Shows the error to the user and hands it back.
    async fn report(&self, error: LifecycleError) -> LifecycleError {
        let message = match &error {
            LifecycleError::Validation(inner) => {
                tracing::debug!(missing = ?inner.missing_fields(), "Form rejected");
                inner.to_string()
            }
            LifecycleError::NotFound(_) => "Event not found".to_string(),
            LifecycleError::Backend(inner) => {
                tracing::error!(error = %inner, "Backend request failed");
                "Something went wrong, please try again".to_string()
            }
        };
        tracing::warn!(error = %error, "Event operation failed");
        self.host
            .show_message(&message, NotificationKind::Error)
            .await;
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::host::testing::ScriptedHost;
    use chrono::NaiveDate;
    use m2calendar_core::calendar::{EventCategory, RequiredField, ValidationError};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn controller(host: Arc<ScriptedHost>) -> EventLifecycleController {
        EventLifecycleController::new(host, Arc::new(MockBackend::new()), "demo_user")
    }

    fn form(title: &str, date: &str, time: &str) -> EventForm {
        EventForm::default()
            .with_title(title)
            .with_date(date)
            .with_time(time)
            .with_category(EventCategory::Meeting)
    }

    #[tokio::test]
    async fn test_submit_adds_exactly_one_event() {
        let host = Arc::new(ScriptedHost::declining());
        let lifecycle = controller(host.clone());
        let mut store = EventStore::new();
        let date = make_date(2024, 12, 19);

        let event = lifecycle
            .submit(&mut store, &form("Meeting", "2024-12-19", "15:00").with_client("Ivanov"))
            .await
            .unwrap();

        let on_date = store.query(date);
        assert_eq!(on_date.len(), 1);
        assert_eq!(on_date[0], event);
        assert_eq!(on_date[0].title, "Meeting");
        assert_eq!(on_date[0].client.as_deref(), Some("Ivanov"));
        assert_eq!(
            host.last_message(),
            Some(("Event created!".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_submit_assigns_distinct_identities() {
        let lifecycle = controller(Arc::new(ScriptedHost::declining()));
        let mut store = EventStore::new();

        let a = lifecycle
            .submit(&mut store, &form("A", "2024-12-19", "09:00"))
            .await
            .unwrap();
        let b = lifecycle
            .submit(&mut store, &form("A", "2024-12-19", "09:00"))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.count_on(make_date(2024, 12, 19)), 2);
    }

    #[tokio::test]
    async fn test_submit_missing_fields_leaves_store_unchanged() {
        let host = Arc::new(ScriptedHost::declining());
        let lifecycle = controller(host.clone());
        let date = make_date(2024, 12, 19);
        let mut store = EventStore::from_events([Event::new(
            "Existing",
            date,
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )]);

        for (title, day, time, missing) in [
            ("", "2024-12-19", "10:00", RequiredField::Title),
            ("Call", "", "10:00", RequiredField::Date),
            ("Call", "2024-12-19", " ", RequiredField::Time),
        ] {
            let result = lifecycle.submit(&mut store, &form(title, day, time)).await;
            assert_eq!(
                result,
                Err(LifecycleError::Validation(ValidationError::MissingFields(
                    vec![missing]
                )))
            );
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.count_on(date), 1);
        let (message, kind) = host.last_message().unwrap();
        assert_eq!(kind, NotificationKind::Error);
        assert_eq!(message, "Please fill in the required fields: time");
    }

    #[tokio::test]
    async fn test_edit_prefills_form() {
        let lifecycle = controller(Arc::new(ScriptedHost::declining()));
        let mut store = EventStore::new();
        let event = lifecycle
            .submit(&mut store, &form("Showing", "2024-12-20", "10:00"))
            .await
            .unwrap();

        let prefilled = lifecycle.edit(&store, event.id).await.unwrap();

        assert_eq!(prefilled.title, "Showing");
        assert_eq!(prefilled.date, "2024-12-20");
        assert_eq!(prefilled.time, "10:00");
        assert_eq!(prefilled.category, EventCategory::Meeting);
    }

    #[tokio::test]
    async fn test_confirm_edit_relocates_event() {
        let lifecycle = controller(Arc::new(ScriptedHost::declining()));
        let mut store = EventStore::new();
        let d1 = make_date(2024, 12, 19);
        let d2 = make_date(2024, 12, 21);
        let event = lifecycle
            .submit(&mut store, &form("Deal", "2024-12-19", "11:00"))
            .await
            .unwrap();

        let edited = lifecycle
            .edit(&store, event.id)
            .await
            .unwrap()
            .with_date("2024-12-21");
        let updated = lifecycle
            .confirm_edit(&mut store, event.id, &edited)
            .await
            .unwrap();

        assert_eq!(updated.id, event.id);
        assert_eq!(updated.created_at, event.created_at);
        assert!(store.query(d1).iter().all(|e| e.id != event.id));
        assert!(store.query(d2).iter().any(|e| e.id == event.id));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_confirm_edit_invalid_form_keeps_event() {
        let lifecycle = controller(Arc::new(ScriptedHost::declining()));
        let mut store = EventStore::new();
        let event = lifecycle
            .submit(&mut store, &form("Deal", "2024-12-19", "11:00"))
            .await
            .unwrap();

        let result = lifecycle
            .confirm_edit(&mut store, event.id, &form("", "2024-12-21", "11:00"))
            .await;

        assert!(matches!(result, Err(LifecycleError::Validation(_))));
        assert_eq!(store.get(event.id), Some(event));
    }

    #[tokio::test]
    async fn test_edit_unknown_identity_is_not_found() {
        let host = Arc::new(ScriptedHost::declining());
        let lifecycle = controller(host.clone());
        let mut store = EventStore::new();
        let id = Uuid::new_v4();

        assert_eq!(
            lifecycle.edit(&store, id).await,
            Err(LifecycleError::NotFound(id))
        );
        assert_eq!(
            lifecycle
                .confirm_edit(&mut store, id, &form("X", "2024-12-19", "09:00"))
                .await,
            Err(LifecycleError::NotFound(id))
        );
        assert_eq!(
            lifecycle.delete(&mut store, id).await,
            Err(LifecycleError::NotFound(id))
        );
        assert!(host.confirmations().is_empty());
    }

    #[tokio::test]
    async fn test_delete_declined_leaves_store_unchanged() {
        let host = Arc::new(ScriptedHost::declining());
        let lifecycle = controller(host.clone());
        let mut store = EventStore::new();
        let event = lifecycle
            .submit(&mut store, &form("Call", "2024-12-19", "14:30"))
            .await
            .unwrap();

        let outcome = lifecycle.delete(&mut store, event.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.get(event.id), Some(event));
        assert_eq!(host.confirmations(), vec!["Delete event?".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_confirmed_removes_last_event_on_date() {
        let host = Arc::new(ScriptedHost::confirming());
        let lifecycle = controller(host.clone());
        let mut store = EventStore::new();
        let date = make_date(2024, 12, 19);
        let event = lifecycle
            .submit(&mut store, &form("Call", "2024-12-19", "14:30"))
            .await
            .unwrap();

        let outcome = lifecycle.delete(&mut store, event.id).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted(event));
        assert!(store.query(date).is_empty());
        assert!(store.dates().is_empty());
        assert_eq!(
            host.last_message(),
            Some(("Event deleted!".to_string(), NotificationKind::Success))
        );
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_store_unchanged() {
        let host = Arc::new(ScriptedHost::confirming());
        // The event exists locally but not in the backend.
        let lifecycle = controller(host.clone());
        let date = make_date(2024, 12, 19);
        let local = Event::new("Local only", date, chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let mut store = EventStore::from_events([local.clone()]);

        let result = lifecycle.delete(&mut store, local.id).await;

        assert!(matches!(result, Err(LifecycleError::Backend(_))));
        assert_eq!(store.get(local.id), Some(local));
        assert_eq!(host.last_message().map(|(_, kind)| kind), Some(NotificationKind::Error));
    }
}
