//! Pretty output formatting.

use chrono::Datelike;

use m2calendar_core::calendar::{
    DayProjection, Event, MonthCell, MonthProjection, Projection, WeekColumn, WeekProjection,
};

const WEEKDAY_HEADER: &str = " Mo   Tu   We   Th   Fr   Sa   Su";

/// Format a projection for display.
pub fn format_projection(projection: &Projection) -> String {
    match projection {
        Projection::Month(month) => format_month(month),
        Projection::Week(week) => format_week(week),
        Projection::Day(day) => format_day(day),
    }
}

/// Format the month grid followed by the agenda of its busy days.
///
/// Today is bracketed, days with events carry a `*`, and days of the
/// neighbouring months are left blank.
pub fn format_month(month: &MonthProjection) -> String {
    let mut output = format!("{}\n{}\n", month.label.to_uppercase(), WEEKDAY_HEADER);

    for week in month.cells.chunks(7) {
        let row: Vec<String> = week.iter().map(format_grid_day).collect();
        output.push_str(row.join("").trim_end());
        output.push('\n');
    }

    let busy: Vec<&MonthCell> = month
        .cells
        .iter()
        .filter(|cell| cell.in_month && !cell.events.is_empty())
        .collect();

    if busy.is_empty() {
        output.push_str("\nNo events this month.");
        return output;
    }

    for cell in busy {
        output.push_str(&format!("\n{}\n", cell.date.format("%a %d")));
        for event in &cell.events {
            output.push_str(&format!("  {}\n", format_event_line(event)));
        }
        if let Some(more) = cell.overflow_label() {
            output.push_str(&format!("  {more}\n"));
        }
    }

    output.trim_end().to_string()
}

fn format_grid_day(cell: &MonthCell) -> String {
    if !cell.in_month {
        return "     ".to_string();
    }
    let marker = if cell.events.is_empty() { ' ' } else { '*' };
    if cell.is_today {
        format!("[{:>2}]{}", cell.date.day(), marker)
    } else {
        format!(" {:>2}{} ", cell.date.day(), marker)
    }
}

/// Format the week as one block per day, events grouped by hour slot.
pub fn format_week(week: &WeekProjection) -> String {
    let mut output = week.label.to_uppercase();
    for column in &week.columns {
        output.push_str(&format!("\n\n{}", format_week_column(column)));
    }
    output
}

fn format_week_column(column: &WeekColumn) -> String {
    let today = if column.is_today { " (today)" } else { "" };
    let mut output = format!("{}{}", column.date.format("%a %d %b"), today);

    if column.events.is_empty() {
        output.push_str("\n  -");
        return output;
    }

    for slot in column.slots.iter().filter(|slot| !slot.events.is_empty()) {
        output.push_str(&format!("\n  {:02}:00", slot.hour));
        for event in &slot.events {
            output.push_str(&format!("\n    {}", format_event_line(event)));
        }
    }
    output
}

/// Format the day agenda with full event details.
pub fn format_day(day: &DayProjection) -> String {
    let today = if day.is_today { " (today)" } else { "" };
    let mut output = format!("{}{}\n", day.label.to_uppercase(), today);
    output.push_str(&"-".repeat(40));

    if day.is_empty() {
        output.push_str("\nNo events for this day.");
        return output;
    }

    for event in &day.events {
        output.push_str(&format!("\n{}\n", format_event(event)));
    }
    output.trim_end().to_string()
}

/// One-line summary: time, icon and title.
pub fn format_event_line(event: &Event) -> String {
    format!(
        "{} {} {}",
        event.time_label(),
        event.category.icon(),
        event.title
    )
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Type: {}\n  Date: {}",
        format_event_line(event),
        event.id,
        event.category.label(),
        event.date.format("%d.%m.%Y")
    );
    if let Some(duration) = event.duration {
        output.push_str(&format!("\n  Duration: {} min", duration));
    }
    if let Some(loc) = &event.location {
        output.push_str(&format!("\n  Location: {}", loc));
    }
    if let Some(client) = &event.client {
        output.push_str(&format!("\n  Client: {}", client));
    }
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if event.reminder {
        output.push_str("\n  Reminder: on");
    }
    output
}
