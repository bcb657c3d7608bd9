use super::dates::{parse_date_key, parse_time};
use super::error::{RequiredField, ValidationError};
use super::requests::{EventForm, NewEvent};

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Validates an event form and converts it into a create/update payload.
///
/// Title, date and time must be present and non-blank; every missing one is
/// reported at once. Present values must then parse, the duration (when
/// given) must be positive, and the title must fit [`MAX_TITLE_LEN`].
pub fn validate_form(form: &EventForm) -> Result<NewEvent, ValidationError> {
    let title = form.title.trim();
    let date = form.date.trim();
    let time = form.time.trim();

    let missing: Vec<RequiredField> = [
        (RequiredField::Title, title),
        (RequiredField::Date, date),
        (RequiredField::Time, time),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }

    let date = parse_date_key(date).ok_or_else(|| ValidationError::InvalidDate(date.to_string()))?;
    let time = parse_time(time).ok_or_else(|| ValidationError::InvalidTime(time.to_string()))?;

    if form.duration == Some(0) {
        return Err(ValidationError::InvalidDuration);
    }

    Ok(NewEvent {
        title: title.to_string(),
        date,
        time,
        duration: form.duration,
        category: form.category,
        location: non_blank(&form.location),
        client: non_blank(&form.client),
        description: non_blank(&form.description),
        reminder: form.reminder,
    })
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
