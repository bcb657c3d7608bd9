//! Date-bucketed in-memory event store.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calendar::Event;

/// Whether an upsert inserted a new event or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    /// Replaced in place within the same bucket.
    Updated,
    /// Replaced and moved to the bucket for its new date.
    Relocated { from: NaiveDate },
}

/// Events grouped by calendar date.
///
/// Each event lives in exactly one bucket, keyed by its `date`. Within a
/// bucket events keep insertion order; a relocated event is appended to the
/// end of its new bucket. Empty buckets are removed.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    buckets: BTreeMap<NaiveDate, Vec<Event>>,
    index: HashMap<Uuid, NaiveDate>,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given events.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut store = Self::new();
        store.replace_all(events);
        store
    }

    /// Inserts the event, or replaces the stored event with the same identity.
    pub fn upsert(&mut self, event: Event) -> UpsertOutcome {
        let Some(previous_date) = self.index.get(&event.id).copied() else {
            self.index.insert(event.id, event.date);
            self.buckets.entry(event.date).or_default().push(event);
            return UpsertOutcome::Inserted;
        };

        if previous_date == event.date {
            if let Some(slot) = self
                .buckets
                .get_mut(&previous_date)
                .and_then(|bucket| bucket.iter_mut().find(|e| e.id == event.id))
            {
                *slot = event;
            }
            return UpsertOutcome::Updated;
        }

        self.take_from_bucket(previous_date, event.id);
        self.index.insert(event.id, event.date);
        self.buckets.entry(event.date).or_default().push(event);
        UpsertOutcome::Relocated {
            from: previous_date,
        }
    }

    /// Removes the event with the given identity. Unknown identities are a no-op.
    pub fn remove(&mut self, id: Uuid) -> Option<Event> {
        let date = self.index.remove(&id)?;
        self.take_from_bucket(date, id)
    }

    /// Returns a copy of the events on the given date, in store order.
    pub fn query(&self, date: NaiveDate) -> Vec<Event> {
        self.buckets.get(&date).cloned().unwrap_or_default()
    }

    /// Clears the store and re-buckets the given events.
    ///
    /// A later event with an identity seen earlier replaces the earlier one.
    pub fn replace_all(&mut self, events: impl IntoIterator<Item = Event>) {
        self.clear();
        for event in events {
            self.upsert(event);
        }
    }

    /// Returns a copy of the event with the given identity.
    pub fn get(&self, id: Uuid) -> Option<Event> {
        let date = self.index.get(&id)?;
        self.buckets
            .get(date)
            .and_then(|bucket| bucket.iter().find(|e| e.id == id))
            .cloned()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }

    /// Total number of events across all buckets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of events on the given date.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.buckets.get(&date).map_or(0, Vec::len)
    }

    /// Dates that currently hold at least one event, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.buckets.keys().copied().collect()
    }

    /// Events dated within `start..=end`, by date then store order.
    pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Event> {
        if end < start {
            return Vec::new();
        }
        self.buckets
            .range(start..=end)
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect()
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.index.clear();
    }

    fn take_from_bucket(&mut self, date: NaiveDate, id: Uuid) -> Option<Event> {
        let bucket = self.buckets.get_mut(&date)?;
        let position = bucket.iter().position(|e| e.id == id)?;
        let event = bucket.remove(position);
        if bucket.is_empty() {
            self.buckets.remove(&date);
        }
        Some(event)
    }
}
