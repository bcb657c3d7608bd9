//! Serde helper functions for the event wire format and form deserialization.
//!
//! Event times travel as zero-padded `HH:MM` strings, and form submissions
//! use empty strings for fields the user left blank.

use serde::{Deserialize, Deserializer};

/// (De)serializes a `NaiveTime` as `HH:MM`.
///
/// Deserialization also accepts `HH:MM:SS`; seconds are dropped.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map(crate::calendar::dates::truncate_to_minute)
            .map_err(serde::de::Error::custom)
    }
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional duration in minutes.
///
/// Accepts a number or a numeric string; empty strings and unparseable
/// strings become None, the way a blank number input is treated.
pub fn deserialize_optional_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Minutes {
        Number(u32),
        Text(String),
    }

    let value: Option<Minutes> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Minutes::Number(n)) => Some(n),
        Some(Minutes::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
