//! Calendar-date handling for due dates.
//!
//! A due date is a day-granular value: the storage column is a plain `DATE`
//! and all comparisons happen at day granularity. Clients may still send a
//! full timestamp (e.g. from a date picker that produces an ISO instant);
//! we keep the calendar date exactly as written in the payload instead of
//! converting through a timezone, which would shift dates near midnight by
//! a day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a calendar date from either a date-only string (`2024-12-31`) or a
/// full RFC 3339 timestamp (`2024-12-31T23:30:00.000Z`).
///
/// For timestamps, the date portion is taken literally from the string, so
/// `2024-12-31T23:30:00-08:00` is December 31st regardless of what that
/// instant would be in UTC or the server's local zone.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    // Timestamp forms start with the same ten date characters.
    if s.len() > 10 && (s.as_bytes()[10] == b'T' || s.as_bytes()[10] == b' ') {
        if let Ok(date) = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d") {
            return Ok(date);
        }
    }

    Err(format!("invalid date: {s}"))
}

/// Convert a calendar date to the timestamp used for display purposes:
/// midnight UTC on that day.
pub fn date_to_timestamp(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// The calendar date of a timestamp, in UTC.
pub fn timestamp_to_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// A todo is overdue when it is not completed and its due date's calendar
/// day is strictly before `today`. A due date of today is never overdue,
/// no matter the current time of day.
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool, today: NaiveDate) -> bool {
    match due_date {
        Some(due) => !completed && due < today,
        None => false,
    }
}

/// Serde helpers for optional due-date fields on create inputs.
///
/// Accepts `null`, a date-only string, or an RFC 3339 timestamp (truncated
/// to its literal calendar date).
pub mod opt_calendar_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_calendar_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Serde helper for tri-state due-date fields on update inputs.
///
/// Distinguishes a missing key (pair with `#[serde(default)]`, yielding
/// `None` = leave unchanged) from an explicit `null` (`Some(None)` = clear)
/// and a value (`Some(Some(date))` = set).
pub mod patch_calendar_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        opt_calendar_date::deserialize(deserializer).map(Some)
    }
}

/// Serde helper for tri-state fields of any inner type. Only called when
/// the key is present, so the outer `Option` is always `Some`; pair with
/// `#[serde(default)]` so a missing key yields `None`.
pub fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}
