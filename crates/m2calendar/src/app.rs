//! The calendar application: store, controllers and the published projection.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use tokio::sync::watch;
use uuid::Uuid;

use m2calendar_core::backend::EventBackend;
use m2calendar_core::calendar::{
    project, CalendarViewState, Event, EventForm, Projection, ViewMode,
};
use m2calendar_core::host::{NotificationHost, NotificationKind};
use m2calendar_core::store::EventStore;

use crate::clock::Clock;
use crate::config::Config;
use crate::controllers::{DeleteOutcome, EventLifecycleController, NavigationController};
use crate::error::Result;

/// Owns the event store and both controllers.
///
/// Every operation ends by re-projecting the store for the current view and
/// publishing it on a `watch` channel, so subscribers always see the latest
/// state. The app is driven from a single task; operations take `&mut self`.
pub struct CalendarApp {
    store: EventStore,
    navigation: NavigationController,
    lifecycle: EventLifecycleController,
    host: Arc<dyn NotificationHost>,
    backend: Arc<dyn EventBackend>,
    sync_delay: Duration,
    projection: watch::Sender<Projection>,
}

impl CalendarApp {
    pub fn new(
        config: &Config,
        clock: Arc<dyn Clock>,
        host: Arc<dyn NotificationHost>,
        backend: Arc<dyn EventBackend>,
        mode: ViewMode,
    ) -> Self {
        let store = EventStore::new();
        let navigation = NavigationController::new(clock, mode);
        let initial = project(navigation.state(), &store, navigation.today());
        let (projection, _) = watch::channel(initial);

        Self {
            lifecycle: EventLifecycleController::new(
                host.clone(),
                backend.clone(),
                config.user_id.clone(),
            ),
            store,
            navigation,
            host,
            backend,
            sync_delay: config.sync_delay(),
            projection,
        }
    }

    /// Receives every projection published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Projection> {
        self.projection.subscribe()
    }

    /// The most recently published projection.
    pub fn projection(&self) -> Projection {
        self.projection.borrow().clone()
    }

    pub fn state(&self) -> &CalendarViewState {
        self.navigation.state()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.navigation.today()
    }

    /// Re-projects the store for the current view and publishes it.
    pub fn refresh(&self) -> Projection {
        let projection = project(self.navigation.state(), &self.store, self.today());
        self.projection.send_replace(projection.clone());
        projection
    }

    pub fn next(&mut self) -> Projection {
        self.navigation.next();
        self.refresh()
    }

    pub fn previous(&mut self) -> Projection {
        self.navigation.previous();
        self.refresh()
    }

    pub fn go_to_today(&mut self) -> Projection {
        self.navigation.go_to_today();
        self.refresh()
    }

    pub fn go_to_date(&mut self, date: NaiveDate) -> Projection {
        self.navigation.go_to_date(date);
        self.refresh()
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Projection {
        self.navigation.select_date(date);
        self.refresh()
    }

    pub fn switch_view(&mut self, mode: ViewMode) -> Projection {
        self.navigation.switch_view(mode);
        self.refresh()
    }

    /// A blank event form for the given date, or else the selected date, or
    /// else today. A clicked hour slot pre-sets the time to the full hour.
    pub fn new_form(&self, date: Option<NaiveDate>, hour: Option<u32>) -> EventForm {
        let date = date
            .or(self.navigation.state().selected)
            .unwrap_or_else(|| self.today());
        let time = hour.and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0));
        EventForm::blank(date, time)
    }

    pub async fn submit(&mut self, form: &EventForm) -> Result<Event> {
        let result = self.lifecycle.submit(&mut self.store, form).await;
        self.refresh();
        result
    }

    pub async fn edit(&self, id: Uuid) -> Result<EventForm> {
        self.lifecycle.edit(&self.store, id).await
    }

    pub async fn confirm_edit(&mut self, id: Uuid, form: &EventForm) -> Result<Event> {
        let result = self.lifecycle.confirm_edit(&mut self.store, id, form).await;
        self.refresh();
        result
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<DeleteOutcome> {
        let result = self.lifecycle.delete(&mut self.store, id).await;
        self.refresh();
        result
    }

    /// Replaces the store with the user's events from the backend.
    pub async fn load_events(&mut self) -> Result<usize> {
        match self.backend.list_events(self.lifecycle.user_id()).await {
            Ok(events) => {
                let count = events.len();
                self.store.replace_all(events);
                tracing::info!(count, user_id = self.lifecycle.user_id(), "Loaded events");
                self.refresh();
                Ok(count)
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load events");
                self.host
                    .show_message("Failed to load events", NotificationKind::Error)
                    .await;
                Err(error.into())
            }
        }
    }

    /// Waits out the sync delay, then reloads from the backend.
    pub async fn sync(&mut self) -> Result<usize> {
        tracing::debug!(delay_ms = self.sync_delay.as_millis() as u64, "Syncing events");
        tokio::time::sleep(self.sync_delay).await;

        match self.backend.list_events(self.lifecycle.user_id()).await {
            Ok(events) => {
                let count = events.len();
                self.store.replace_all(events);
                tracing::info!(count, "Events synced");
                self.refresh();
                self.host
                    .show_message("Events synced!", NotificationKind::Success)
                    .await;
                Ok(count)
            }
            Err(error) => {
                tracing::error!(error = %error, "Sync failed");
                self.host
                    .show_message("Sync failed", NotificationKind::Error)
                    .await;
                Err(error.into())
            }
        }
    }
}
