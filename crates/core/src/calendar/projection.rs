//! Render-ready projections of the event store for each view mode.
//!
//! Projections are pure: the same view state, store contents and `today`
//! always produce the same structure.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::{add_days, calendar_week, month_start, week_start};
use super::sorting::{bucket_events_by_hour, group_events_by_date, sort_events_by_time};
use super::types::Event;
use super::view::{CalendarViewState, ViewMode};
use crate::store::EventStore;

/// Cells in the month grid: six weeks of seven days.
pub const MONTH_CELL_COUNT: usize = 42;

/// Events shown per month cell before collapsing into an overflow marker.
pub const MONTH_CELL_EVENT_LIMIT: usize = 3;

pub const HOURS_PER_DAY: u32 = 24;

/// The derived structure for the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Projection {
    Month(MonthProjection),
    Week(WeekProjection),
    Day(DayProjection),
}

impl Projection {
    pub fn mode(&self) -> ViewMode {
        match self {
            Projection::Month(_) => ViewMode::Month,
            Projection::Week(_) => ViewMode::Week,
            Projection::Day(_) => ViewMode::Day,
        }
    }

    /// Header text for the visible period.
    pub fn label(&self) -> &str {
        match self {
            Projection::Month(month) => &month.label,
            Projection::Week(week) => &week.label,
            Projection::Day(day) => &day.label,
        }
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the leading and trailing days of neighbouring months.
    pub in_month: bool,
    pub is_today: bool,
    /// At most [`MONTH_CELL_EVENT_LIMIT`] events, in store order.
    pub events: Vec<Event>,
    /// Number of events not shown, when there are more than the limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<usize>,
}

impl MonthCell {
    /// Overflow marker text, e.g. `+2`.
    pub fn overflow_label(&self) -> Option<String> {
        self.overflow.map(|hidden| format!("+{hidden}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthProjection {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub cells: Vec<MonthCell>,
}

/// One hour row within a week column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSlot {
    pub hour: u32,
    /// Events starting within this hour, in store order.
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekColumn {
    pub date: NaiveDate,
    pub is_today: bool,
    /// All events for the day, in store order.
    pub events: Vec<Event>,
    /// 24 slots, hour 0 through 23.
    pub slots: Vec<HourSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekProjection {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub columns: Vec<WeekColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProjection {
    pub date: NaiveDate,
    pub is_today: bool,
    pub label: String,
    /// Sorted ascending by time; equal times keep store order.
    pub events: Vec<Event>,
}

impl DayProjection {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Builds the projection for the view state's active mode.
pub fn project(state: &CalendarViewState, store: &EventStore, today: NaiveDate) -> Projection {
    match state.mode {
        ViewMode::Month => Projection::Month(project_month(state, store, today)),
        ViewMode::Week => Projection::Week(project_week(state, store, today)),
        ViewMode::Day => Projection::Day(project_day(state, store, today)),
    }
}

/// Builds the 42-cell month grid starting at the Monday on or before the
/// first of the anchor's month.
pub fn project_month(
    state: &CalendarViewState,
    store: &EventStore,
    today: NaiveDate,
) -> MonthProjection {
    let first = month_start(state.anchor);
    let grid_start = week_start(first);

    let cells = (0..MONTH_CELL_COUNT as i64)
        .map(|offset| {
            let date = add_days(grid_start, offset);
            let mut events = store.query(date);
            let total = events.len();
            events.truncate(MONTH_CELL_EVENT_LIMIT);

            MonthCell {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_today: date == today,
                events,
                overflow: (total > MONTH_CELL_EVENT_LIMIT)
                    .then(|| total - MONTH_CELL_EVENT_LIMIT),
            }
        })
        .collect();

    MonthProjection {
        year: first.year(),
        month: first.month(),
        label: state.period_label(),
        cells,
    }
}

/// Builds seven day columns (Monday to Sunday) around the anchor, each with
/// its events placed into hour slots by start time.
pub fn project_week(
    state: &CalendarViewState,
    store: &EventStore,
    today: NaiveDate,
) -> WeekProjection {
    let dates = calendar_week(state.anchor);
    let start = dates[0];
    let end = dates[dates.len() - 1];

    let in_range = store.events_between(start, end);
    let grouped = group_events_by_date(&in_range);

    let columns = dates
        .iter()
        .map(|date| {
            let events: Vec<Event> = grouped
                .get(date)
                .map(|refs| refs.iter().map(|e| (*e).clone()).collect())
                .unwrap_or_default();

            let slots = bucket_events_by_hour(&events)
                .into_iter()
                .zip(0..HOURS_PER_DAY)
                .map(|(events, hour)| HourSlot { hour, events })
                .collect();

            WeekColumn {
                date: *date,
                is_today: *date == today,
                events,
                slots,
            }
        })
        .collect();

    WeekProjection {
        start,
        end,
        label: state.period_label(),
        columns,
    }
}

/// Builds the agenda for the anchor date.
pub fn project_day(state: &CalendarViewState, store: &EventStore, today: NaiveDate) -> DayProjection {
    let mut events = store.query(state.anchor);
    sort_events_by_time(&mut events);

    DayProjection {
        date: state.anchor,
        is_today: state.anchor == today,
        label: state.period_label(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn state(anchor: NaiveDate, mode: ViewMode) -> CalendarViewState {
        CalendarViewState::new(anchor, mode)
    }

    #[test]
    fn test_month_grid_shape() {
        let anchor = make_date(2024, 12, 19);
        let today = make_date(2024, 12, 19);
        let month = project_month(&state(anchor, ViewMode::Month), &EventStore::new(), today);

        assert_eq!(month.cells.len(), MONTH_CELL_COUNT);
        // December 1st 2024 is a Sunday, so the grid opens on Monday Nov 25th.
        assert_eq!(month.cells[0].date, make_date(2024, 11, 25));
        assert!(!month.cells[0].in_month);
        assert_eq!(month.cells[6].date, make_date(2024, 12, 1));
        assert!(month.cells[6].in_month);
        assert_eq!(month.cells[41].date, make_date(2025, 1, 5));
        assert!(!month.cells[41].in_month);

        let today_cells: Vec<_> = month.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, today);
        assert_eq!(month.label, "December 2024");
    }

    #[test]
    fn test_month_grid_starts_on_first_when_first_is_monday() {
        let anchor = make_date(2024, 1, 20);
        let month = project_month(&state(anchor, ViewMode::Month), &EventStore::new(), anchor);

        assert_eq!(month.cells[0].date, make_date(2024, 1, 1));
        assert!(month.cells[0].in_month);
    }

    #[test]
    fn test_month_cell_overflow() {
        let date = make_date(2024, 12, 19);
        let store = EventStore::from_events(
            (0..5).map(|i| Event::new(format!("Event {i}"), date, make_time(9 + i, 0))),
        );

        let month = project_month(&state(date, ViewMode::Month), &store, date);
        let cell = month.cells.iter().find(|c| c.date == date).unwrap();

        assert_eq!(cell.events.len(), 3);
        let titles: Vec<_> = cell.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Event 0", "Event 1", "Event 2"]);
        assert_eq!(cell.overflow, Some(2));
        assert_eq!(cell.overflow_label().as_deref(), Some("+2"));
    }

    #[test]
    fn test_month_cell_without_overflow() {
        let date = make_date(2024, 12, 19);
        let store = EventStore::from_events(
            (0..3).map(|i| Event::new(format!("Event {i}"), date, make_time(9, 0))),
        );

        let month = project_month(&state(date, ViewMode::Month), &store, date);
        let cell = month.cells.iter().find(|c| c.date == date).unwrap();

        assert_eq!(cell.events.len(), 3);
        assert_eq!(cell.overflow, None);
    }

    #[test]
    fn test_week_columns_and_slots() {
        let wednesday = make_date(2024, 12, 18);
        let store = EventStore::from_events([
            Event::new("Showing", wednesday, make_time(10, 0)),
            Event::new("Call", wednesday, make_time(10, 30)),
            Event::new("Deal", make_date(2024, 12, 22), make_time(18, 0)),
            Event::new("Next week", make_date(2024, 12, 23), make_time(9, 0)),
        ]);

        let week = project_week(&state(wednesday, ViewMode::Week), &store, wednesday);

        assert_eq!(week.columns.len(), 7);
        assert_eq!(week.start, make_date(2024, 12, 16));
        assert_eq!(week.end, make_date(2024, 12, 22));
        assert!(week.columns.iter().all(|c| c.slots.len() == 24));
        assert!(week.columns[2].is_today);

        let wed = &week.columns[2];
        assert_eq!(wed.events.len(), 2);
        assert_eq!(wed.slots[10].hour, 10);
        assert_eq!(wed.slots[10].events.len(), 2);
        assert_eq!(week.columns[6].slots[18].events[0].title, "Deal");

        let total: usize = week.columns.iter().map(|c| c.events.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_day_sorted_by_time_with_stable_ties() {
        let date = make_date(2024, 12, 19);
        let store = EventStore::from_events([
            Event::new("Afternoon", date, make_time(14, 30)),
            Event::new("First nine", date, make_time(9, 0)),
            Event::new("Second nine", date, make_time(9, 0)),
        ]);

        let day = project_day(&state(date, ViewMode::Day), &store, date);

        let times: Vec<_> = day.events.iter().map(Event::time_label).collect();
        assert_eq!(times, vec!["09:00", "09:00", "14:30"]);
        assert_eq!(day.events[0].title, "First nine");
        assert_eq!(day.events[1].title, "Second nine");
        assert!(day.is_today);
    }

    #[test]
    fn test_day_ties_ignore_submitted_seconds() {
        use crate::calendar::{validate_form, EventForm};

        let date = make_date(2024, 12, 19);
        let submitted = [("A first", "09:00:30"), ("B second", "09:00:10")];
        let store = EventStore::from_events(submitted.iter().map(|(title, time)| {
            let form = EventForm::default()
                .with_title(*title)
                .with_date("2024-12-19")
                .with_time(*time);
            validate_form(&form).unwrap().into_event()
        }));

        let day = project_day(&state(date, ViewMode::Day), &store, date);

        let titles: Vec<_> = day.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A first", "B second"]);
        assert!(day.events.iter().all(|e| e.time == make_time(9, 0)));

        let reloaded: Event =
            serde_json::from_str(&serde_json::to_string(&day.events[1]).unwrap()).unwrap();
        assert_eq!(reloaded.time, day.events[1].time);
    }

    #[test]
    fn test_empty_day_is_valid() {
        let date = make_date(2024, 12, 19);
        let day = project_day(&state(date, ViewMode::Day), &EventStore::new(), date);

        assert!(day.is_empty());
        assert_eq!(day.label, "Thursday, 19 December");
    }

    #[test]
    fn test_project_dispatches_on_mode() {
        let date = make_date(2024, 12, 19);
        let store = EventStore::new();

        for mode in [ViewMode::Month, ViewMode::Week, ViewMode::Day] {
            let projection = project(&state(date, mode), &store, date);
            assert_eq!(projection.mode(), mode);
        }
    }

    #[test]
    fn test_projection_serializes_with_view_tag() {
        let date = make_date(2024, 12, 19);
        let projection = project(&state(date, ViewMode::Day), &EventStore::new(), date);
        let json = serde_json::to_value(&projection).unwrap();

        assert_eq!(json["view"], "day");
        assert_eq!(json["date"], "2024-12-19");
    }
}
