pub mod dates;
mod error;
mod mock_data;
mod operations;
mod projection;
mod requests;
mod sorting;
mod types;
mod view;

pub use error::{RequiredField, ValidationError};
pub use mock_data::sample_events;
pub use operations::{validate_form, MAX_TITLE_LEN};
pub use projection::{
    project, project_day, project_month, project_week, DayProjection, HourSlot, MonthCell,
    MonthProjection, Projection, WeekColumn, WeekProjection, HOURS_PER_DAY, MONTH_CELL_COUNT,
    MONTH_CELL_EVENT_LIMIT,
};
pub use requests::{EventForm, NewEvent};
pub use sorting::{bucket_events_by_hour, group_events_by_date, sort_events_by_time};
pub use types::{Event, EventCategory};
pub use view::{CalendarViewState, Step, ViewMode};
