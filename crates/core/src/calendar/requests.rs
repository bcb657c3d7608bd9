//! Form and request payload types for event operations.
//!
//! `EventForm` is what the user fills in: raw strings for the required
//! fields, so that a blank or malformed value can be reported instead of
//! rejected at parse time. `NewEvent` is the validated payload sent to a
//! backend, which assigns identity and creation time.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::{date_key, format_time};
use super::types::{Event, EventCategory};
use crate::serde::{deserialize_optional_minutes, deserialize_optional_string};

/// Editable representation of an event, as submitted from the event form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// `HH:MM`.
    #[serde(default)]
    pub time: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<u32>,
    #[serde(rename = "type", default)]
    pub category: EventCategory,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub client: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub reminder: bool,
}

impl EventForm {
    /// A blank form pre-set to a date and, optionally, a time.
    pub fn blank(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self {
            date: date_key(date),
            time: time.map(format_time).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// A form pre-filled from an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: date_key(event.date),
            time: format_time(event.time),
            duration: event.duration,
            category: event.category,
            location: event.location.clone(),
            client: event.client.clone(),
            description: event.description.clone(),
            reminder: event.reminder,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }
}

/// A validated event without identity; the create payload for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::serde::hhmm")]
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(rename = "type", default)]
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub reminder: bool,
}

impl NewEvent {
    /// Convert into an Event with a fresh identity and creation timestamp.
    pub fn into_event(self) -> Event {
        let mut event = Event {
            id: Uuid::new_v4(),
            title: String::new(),
            date: self.date,
            time: self.time,
            duration: None,
            category: EventCategory::default(),
            location: None,
            client: None,
            description: None,
            reminder: false,
            created_at: Utc::now(),
        };
        self.apply_to(&mut event);
        event
    }

    /// Overwrite an existing event's fields, keeping its identity and
    /// creation timestamp.
    pub fn apply_to(self, event: &mut Event) {
        event.title = self.title;
        event.date = self.date;
        event.time = self.time;
        event.duration = self.duration;
        event.category = self.category;
        event.location = self.location;
        event.client = self.client;
        event.description = self.description;
        event.reminder = self.reminder;
    }
}
