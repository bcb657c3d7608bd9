use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of scheduled event, determining its icon and accent class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Meeting,
    /// A property showing.
    Showing,
    Call,
    Deal,
    Task,
    #[default]
    Other,
}

impl EventCategory {
    /// All categories in the order they appear in the event form.
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Meeting,
        EventCategory::Showing,
        EventCategory::Call,
        EventCategory::Deal,
        EventCategory::Task,
        EventCategory::Other,
    ];

    /// Returns the wire/CSS class name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "meeting",
            EventCategory::Showing => "showing",
            EventCategory::Call => "call",
            EventCategory::Deal => "deal",
            EventCategory::Task => "task",
            EventCategory::Other => "other",
        }
    }

    /// Returns the human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "Meeting",
            EventCategory::Showing => "Showing",
            EventCategory::Call => "Call",
            EventCategory::Deal => "Deal",
            EventCategory::Task => "Task",
            EventCategory::Other => "Other",
        }
    }

    /// Returns the icon shown next to the event title in details views.
    pub fn icon(&self) -> &'static str {
        match self {
            EventCategory::Meeting => "🤝",
            EventCategory::Showing => "🏠",
            EventCategory::Call => "📞",
            EventCategory::Deal => "💰",
            EventCategory::Task => "📋",
            EventCategory::Other => "📝",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled event on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "crate::serde::hhmm")]
    pub time: NaiveTime,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(rename = "type", default)]
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The counterparty the event is with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with a fresh identity and creation timestamp.
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            time,
            duration: None,
            category: EventCategory::default(),
            location: None,
            client: None,
            description: None,
            reminder: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the category for this event.
    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the client for this event.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enables the reminder flag.
    pub fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = reminder;
        self
    }

    /// Returns the hour of day (0-23) the event starts in.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the start time as zero-padded `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
