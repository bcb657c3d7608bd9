use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dates::{add_days, add_months, add_weeks, week_start};

/// The active calendar view, which determines the projection shape and the
/// navigation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "day" => Ok(ViewMode::Day),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    fn sign(self) -> i32 {
        match self {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }
}

/// Where the calendar is looking: the anchor date and the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewState {
    pub anchor: NaiveDate,
    pub mode: ViewMode,
    /// The day the user last picked from a grid, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<NaiveDate>,
}

impl CalendarViewState {
    /// Creates a view state anchored at the given date.
    pub fn new(anchor: NaiveDate, mode: ViewMode) -> Self {
        Self {
            anchor,
            mode,
            selected: None,
        }
    }

    /// Moves the anchor one view unit: a calendar month, 7 days or 1 day.
    pub fn step(&mut self, direction: Step) {
        let sign = direction.sign();
        self.anchor = match self.mode {
            ViewMode::Month => add_months(self.anchor, sign),
            ViewMode::Week => add_weeks(self.anchor, sign as i64),
            ViewMode::Day => add_days(self.anchor, sign as i64),
        };
    }

    /// Anchors on the given date and switches to the day view.
    pub fn select(&mut self, date: NaiveDate) {
        self.anchor = date;
        self.selected = Some(date);
        self.mode = ViewMode::Day;
    }

    /// Header text for the visible period.
    ///
    /// Month: `December 2024`. Week: `16 - 22 December`.
    /// Day: `Thursday, 19 December`.
    pub fn period_label(&self) -> String {
        match self.mode {
            ViewMode::Month => self.anchor.format("%B %Y").to_string(),
            ViewMode::Week => {
                let start = week_start(self.anchor);
                let end = add_days(start, 6);
                format!("{} - {} {}", start.day(), end.day(), end.format("%B"))
            }
            ViewMode::Day => self.anchor.format("%A, %-d %B").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_step_month() {
        let mut state = CalendarViewState::new(make_date(2024, 12, 19), ViewMode::Month);
        state.step(Step::Forward);
        assert_eq!(state.anchor, make_date(2025, 1, 19));
        state.step(Step::Backward);
        state.step(Step::Backward);
        assert_eq!(state.anchor, make_date(2024, 11, 19));
    }

    #[test]
    fn test_step_month_from_month_end() {
        let mut state = CalendarViewState::new(make_date(2024, 1, 31), ViewMode::Month);
        state.step(Step::Forward);
        assert_eq!(state.anchor, make_date(2024, 2, 29));
    }

    #[test]
    fn test_step_week_and_day() {
        let mut state = CalendarViewState::new(make_date(2024, 12, 30), ViewMode::Week);
        state.step(Step::Forward);
        assert_eq!(state.anchor, make_date(2025, 1, 6));

        state.mode = ViewMode::Day;
        state.step(Step::Backward);
        assert_eq!(state.anchor, make_date(2025, 1, 5));
    }

    #[test]
    fn test_select_forces_day_view() {
        let mut state = CalendarViewState::new(make_date(2024, 12, 1), ViewMode::Month);
        state.select(make_date(2024, 12, 19));

        assert_eq!(state.mode, ViewMode::Day);
        assert_eq!(state.anchor, make_date(2024, 12, 19));
        assert_eq!(state.selected, Some(make_date(2024, 12, 19)));
    }

    #[test]
    fn test_period_label() {
        let mut state = CalendarViewState::new(make_date(2024, 12, 19), ViewMode::Month);
        assert_eq!(state.period_label(), "December 2024");

        state.mode = ViewMode::Week;
        assert_eq!(state.period_label(), "16 - 22 December");

        state.mode = ViewMode::Day;
        assert_eq!(state.period_label(), "Thursday, 19 December");
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("Week".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert!("year".parse::<ViewMode>().is_err());
    }
}
