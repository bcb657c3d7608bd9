//! Sample events for the mock backend and for tests.
//!
//! Pure functions with no side effects: given the same `today` they always
//! return the same titles, dates and times (identities are fresh each call).

use chrono::{Duration, NaiveDate, NaiveTime};

use super::types::{Event, EventCategory};

/// Sample agenda for a real-estate agent, spread over today and the next
/// two days.
///
/// # Example
///
/// ```
/// use m2calendar_core::calendar::sample_events;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 19).unwrap();
/// let events = sample_events(today);
///
/// assert_eq!(events.len(), 4);
/// ```
pub fn sample_events(today: NaiveDate) -> Vec<Event> {
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
    let tomorrow = today + Duration::days(1);
    let day_after_tomorrow = today + Duration::days(2);

    vec![
        Event::new("Meeting with Ivanov", today, time(15, 0))
            .with_category(EventCategory::Meeting)
            .with_location("At the office")
            .with_client("Ivanov I.I.")
            .with_description("Discuss buying a flat in the city centre"),
        Event::new("Flat showing", tomorrow, time(10, 0))
            .with_category(EventCategory::Showing)
            .with_location("10 Pushkin St")
            .with_client("Petrov P.P.")
            .with_description("Two-room flat, 65 sq.m."),
        Event::new("Call the client", tomorrow, time(14, 30))
            .with_category(EventCategory::Call)
            .with_client("Sidorova A.V.")
            .with_description("Clarify the mortgage details"),
        Event::new("Contract signing", day_after_tomorrow, time(11, 0))
            .with_category(EventCategory::Deal)
            .with_location("Notary, 15 Lenin St")
            .with_client("Kozlov V.M.")
            .with_description("House sale"),
    ]
}
