use std::sync::Arc;

use chrono::NaiveDate;

use m2calendar_core::calendar::{CalendarViewState, Step, ViewMode};

use crate::clock::Clock;

/// Owns the calendar's view state and moves it around.
///
/// The controller only changes state; [`crate::CalendarApp`] re-projects
/// after each call.
pub struct NavigationController {
    state: CalendarViewState,
    clock: Arc<dyn Clock>,
}

impl NavigationController {
    /// Starts anchored on today in the given mode.
    pub fn new(clock: Arc<dyn Clock>, mode: ViewMode) -> Self {
        Self {
            state: CalendarViewState::new(clock.today(), mode),
            clock,
        }
    }

    pub fn state(&self) -> &CalendarViewState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Advances by one month, week or day depending on the view.
    pub fn next(&mut self) {
        self.state.step(Step::Forward);
        tracing::debug!(anchor = %self.state.anchor, mode = %self.state.mode, "Navigated forward");
    }

    /// Goes back by one month, week or day depending on the view.
    pub fn previous(&mut self) {
        self.state.step(Step::Backward);
        tracing::debug!(anchor = %self.state.anchor, mode = %self.state.mode, "Navigated back");
    }

    /// Re-anchors on today, keeping the view.
    pub fn go_to_today(&mut self) {
        self.state.anchor = self.clock.today();
        tracing::debug!(anchor = %self.state.anchor, "Navigated to today");
    }

    /// Re-anchors on the given date, keeping the view.
    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.state.anchor = date;
        tracing::debug!(anchor = %date, "Navigated to date");
    }

    /// Anchors on the picked date and opens its day view.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.state.select(date);
        tracing::debug!(anchor = %date, "Selected date");
    }

    pub fn switch_view(&mut self, mode: ViewMode) {
        self.state.mode = mode;
        tracing::debug!(mode = %mode, "Switched view");
    }
}
