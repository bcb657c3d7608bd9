//! Date helpers shared by the store, the projections and navigation.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime, Timelike};

/// Canonical bucket key format.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Display and form format for times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Formats a date as its canonical `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key. Surrounding whitespace is ignored.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT).ok()
}

/// Formats a time as zero-padded 24-hour `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses `HH:MM` (or `HH:MM:SS`). Surrounding whitespace is ignored.
///
/// Seconds are dropped: event times have minute precision.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .map(truncate_to_minute)
}

/// Drops seconds and sub-seconds from a time of day.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Returns the Monday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(weekday)
}

/// Returns the dates for the week containing the given date (Monday to Sunday).
pub fn calendar_week(date: NaiveDate) -> Vec<NaiveDate> {
    let monday = week_start(date);

    (0..7)
        .map(|offset| monday + Duration::days(offset))
        .collect()
}

/// Returns the first day of the date's month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns true if both dates fall on the same calendar day.
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Adds (or with a negative count, subtracts) whole days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Adds (or subtracts) whole weeks.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks * 7)
}

/// Adds (or subtracts) calendar months.
///
/// The day of month is clamped to the last day of a shorter target month,
/// so Jan 31 + 1 month is Feb 28 (or 29). Results outside chrono's range
/// leave the date unchanged.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let delta = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    };
    shifted.unwrap_or(date)
}
