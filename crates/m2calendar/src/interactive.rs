//! Interactive terminal loop over a [`CalendarApp`].
//!
//! Prompts run on blocking tasks; after every action the current projection
//! is printed again. Operation failures have already been shown through the
//! notification host, so the loop just keeps going.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};

use m2calendar_core::calendar::{
    dates::parse_date_key, sort_events_by_time, Event, EventCategory, EventForm, Projection,
    ViewMode,
};
use m2calendar_core::store::EventStore;

use crate::app::CalendarApp;
use crate::controllers::DeleteOutcome;
use crate::output::pretty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Next,
    Previous,
    Today,
    SwitchView,
    SelectDate,
    Create,
    Edit,
    Delete,
    Details,
    Sync,
    Quit,
}

impl Action {
    const ALL: [Action; 11] = [
        Action::Next,
        Action::Previous,
        Action::Today,
        Action::SwitchView,
        Action::SelectDate,
        Action::Create,
        Action::Edit,
        Action::Delete,
        Action::Details,
        Action::Sync,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Next => "Next ›",
            Action::Previous => "‹ Previous",
            Action::Today => "Today",
            Action::SwitchView => "Switch view",
            Action::SelectDate => "Open a day",
            Action::Create => "New event",
            Action::Edit => "Edit event",
            Action::Delete => "Delete event",
            Action::Details => "Event details",
            Action::Sync => "Sync",
            Action::Quit => "Quit",
        }
    }
}

/// Runs the calendar until the user quits.
pub async fn run(app: &mut CalendarApp) -> Result<()> {
    println!("{}", pretty::format_projection(&app.projection()));

    loop {
        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let index = blocking(move || {
            Select::new()
                .with_prompt("  What next?")
                .items(&labels)
                .default(0)
                .interact()
        })
        .await?;
        let action = Action::ALL[index];
        tracing::debug!(?action, "Interactive action");

        match action {
            Action::Next => {
                app.next();
            }
            Action::Previous => {
                app.previous();
            }
            Action::Today => {
                app.go_to_today();
            }
            Action::SwitchView => {
                let current = app.state().mode;
                let modes = [ViewMode::Month, ViewMode::Week, ViewMode::Day];
                let labels: Vec<&str> = modes.iter().map(ViewMode::as_str).collect();
                let default = modes.iter().position(|m| *m == current).unwrap_or(0);
                let index = blocking(move || {
                    Select::new()
                        .with_prompt("  View")
                        .items(&labels)
                        .default(default)
                        .interact()
                })
                .await?;
                app.switch_view(modes[index]);
            }
            Action::SelectDate => {
                let date = blocking(|| {
                    Input::<String>::new()
                        .with_prompt("  Date (YYYY-MM-DD)")
                        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
                            parse_date_key(input)
                                .map(|_| ())
                                .ok_or("expected YYYY-MM-DD")
                        })
                        .interact_text()
                })
                .await?;
                if let Some(date) = parse_date_key(&date) {
                    app.select_date(date);
                }
            }
            Action::Create => {
                let initial = app.new_form(None, None);
                let form = blocking(move || prompt_form(initial)).await?;
                let _ = app.submit(&form).await;
            }
            Action::Edit => {
                if let Some(event) = pick_event(app).await? {
                    if let Ok(initial) = app.edit(event.id).await {
                        let form = blocking(move || prompt_form(initial)).await?;
                        let _ = app.confirm_edit(event.id, &form).await;
                    }
                }
            }
            Action::Delete => {
                if let Some(event) = pick_event(app).await? {
                    if let Ok(DeleteOutcome::Cancelled) = app.delete(event.id).await {
                        println!("  Kept \"{}\"", event.title);
                    }
                }
            }
            Action::Details => {
                if let Some(event) = pick_event(app).await? {
                    println!("\n{}", pretty::format_event(&event));
                    continue;
                }
            }
            Action::Sync => {
                println!("  Syncing...");
                let _ = app.sync().await;
            }
            Action::Quit => return Ok(()),
        }

        println!("\n{}", pretty::format_projection(&app.projection()));
    }
}

/// Events in the visible period, ordered by date then time.
pub fn visible_events(store: &EventStore, projection: &Projection) -> Vec<Event> {
    let mut events = match projection {
        Projection::Month(month) => match (month.cells.first(), month.cells.last()) {
            (Some(first), Some(last)) => store.events_between(first.date, last.date),
            _ => Vec::new(),
        },
        Projection::Week(week) => store.events_between(week.start, week.end),
        Projection::Day(day) => day.events.clone(),
    };
    sort_events_by_time(&mut events);
    events.sort_by_key(|event| event.date);
    events
}

async fn pick_event(app: &CalendarApp) -> Result<Option<Event>> {
    let events = visible_events(app.store(), &app.projection());
    if events.is_empty() {
        println!("  No events in this period.");
        return Ok(None);
    }

    let labels: Vec<String> = events
        .iter()
        .map(|event| format!("{} {}", event.date.format("%d.%m"), pretty::format_event_line(event)))
        .collect();
    let index = blocking(move || {
        Select::new()
            .with_prompt("  Event")
            .items(&labels)
            .default(0)
            .interact_opt()
    })
    .await?;

    Ok(index.and_then(|i| events.get(i).cloned()))
}

/// Raw answers collected by the event form prompts.
#[derive(Debug, Clone, Default)]
struct FormAnswers {
    title: String,
    date: String,
    time: String,
    category: EventCategory,
    duration: String,
    location: String,
    client: String,
    description: String,
    reminder: bool,
}

impl FormAnswers {
    fn into_form(self) -> EventForm {
        let optional = |value: String| {
            let value = value.trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        EventForm {
            title: self.title,
            date: self.date,
            time: self.time,
            duration: self.duration.trim().parse().ok(),
            category: self.category,
            location: optional(self.location),
            client: optional(self.client),
            description: optional(self.description),
            reminder: self.reminder,
        }
    }
}

fn prompt_form(initial: EventForm) -> dialoguer::Result<EventForm> {
    let text = |prompt: &str, initial: &str| {
        Input::<String>::new()
            .with_prompt(format!("  {prompt}"))
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
    };

    let title = text("Title", &initial.title)?;
    let date = text("Date (YYYY-MM-DD)", &initial.date)?;
    let time = text("Time (HH:MM)", &initial.time)?;

    let labels: Vec<String> = EventCategory::ALL
        .iter()
        .map(|c| format!("{} {}", c.icon(), c.label()))
        .collect();
    let default = EventCategory::ALL
        .iter()
        .position(|c| *c == initial.category)
        .unwrap_or(0);
    let category = Select::new()
        .with_prompt("  Type")
        .items(&labels)
        .default(default)
        .interact()?;

    let duration = text(
        "Duration in minutes (skip)",
        &initial.duration.map(|d| d.to_string()).unwrap_or_default(),
    )?;
    let location = text("Location (skip)", initial.location.as_deref().unwrap_or(""))?;
    let client = text("Client (skip)", initial.client.as_deref().unwrap_or(""))?;
    let description = text("Description (skip)", initial.description.as_deref().unwrap_or(""))?;

    let reminder = Confirm::new()
        .with_prompt("  Remind me")
        .default(initial.reminder)
        .interact()?;

    Ok(FormAnswers {
        title,
        date,
        time,
        category: EventCategory::ALL[category],
        duration,
        location,
        client,
        description,
        reminder,
    }
    .into_form())
}

async fn blocking<T, F>(prompt: F) -> Result<T>
where
    F: FnOnce() -> dialoguer::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let answer = tokio::task::spawn_blocking(prompt)
        .await
        .context("Prompt task failed")?
        .context("Failed to get user input")?;
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use m2calendar_core::calendar::{project, CalendarViewState};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_visible_events_follow_the_view() {
        let today = make_date(2024, 12, 19);
        let store = EventStore::from_events([
            Event::new("Next month", make_date(2025, 1, 20), make_time(9, 0)),
            Event::new("Afternoon", make_date(2024, 12, 20), make_time(14, 30)),
            Event::new("Morning", make_date(2024, 12, 20), make_time(10, 0)),
            Event::new("Today", today, make_time(15, 0)),
        ]);

        let week = project(&CalendarViewState::new(today, ViewMode::Week), &store, today);
        let titles: Vec<_> = visible_events(&store, &week)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Today", "Morning", "Afternoon"]);

        let day = project(&CalendarViewState::new(today, ViewMode::Day), &store, today);
        assert_eq!(visible_events(&store, &day).len(), 1);

        let month = project(&CalendarViewState::new(today, ViewMode::Month), &store, today);
        assert_eq!(visible_events(&store, &month).len(), 3);
    }

    #[test]
    fn test_form_answers_carry_reminder_and_blank_optionals() {
        let form = FormAnswers {
            title: "Flat showing".to_string(),
            date: "2024-12-20".to_string(),
            time: "10:00".to_string(),
            category: EventCategory::Showing,
            duration: " 45 ".to_string(),
            location: "10 Pushkin St".to_string(),
            client: "   ".to_string(),
            reminder: true,
            ..FormAnswers::default()
        }
        .into_form();

        assert!(form.reminder);
        assert_eq!(form.category, EventCategory::Showing);
        assert_eq!(form.duration, Some(45));
        assert_eq!(form.location.as_deref(), Some("10 Pushkin St"));
        assert_eq!(form.client, None);
        assert_eq!(form.description, None);

        let payload = m2calendar_core::calendar::validate_form(&form).unwrap();
        assert!(payload.into_event().reminder);
    }

    #[test]
    fn test_every_action_has_a_label() {
        for action in Action::ALL {
            assert!(!action.label().is_empty());
        }
        assert_eq!(Action::ALL.last(), Some(&Action::Quit));
    }
}
