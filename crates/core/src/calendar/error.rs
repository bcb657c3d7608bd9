use thiserror::Error;

/// A field the event form cannot be submitted without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Title,
    Date,
    Time,
}

impl RequiredField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Date => "date",
            RequiredField::Time => "time",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when validating an event form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),
    #[error("Duration must be a positive number of minutes")]
    InvalidDuration,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
}

impl ValidationError {
    /// The missing fields, if this is a missing-fields error.
    pub fn missing_fields(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
