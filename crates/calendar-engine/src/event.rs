//! Event records and the static event source.
//!
//! Events are loaded once from a JSON array and never mutated afterwards.
//! Each record carries a calendar date, an optional 12-hour time of day, a
//! title, and a `type` tag. The tag is folded into [`EventKind`] at load time
//! so that every matching rule downstream is an exhaustive `match` instead of
//! a string comparison.
//!
//! ```json
//! [
//!   { "date": "1990-05-12", "title": "Mom", "type": "birthday" },
//!   { "date": "2024-05-20", "time": "09:00 AM", "title": "Dentist" }
//! ]
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::cursor::YearMonth;
use crate::error::{CalendarError, Result};
use crate::status;

/// How an event recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// Recurs every year on the stored month and day.
    #[serde(rename = "birthday")]
    Birthday,
    /// Anchored to exactly one calendar date.
    #[serde(rename = "event")]
    OneTime,
}

impl EventKind {
    /// Map the raw `type` tag to a kind. Anything other than `"birthday"`,
    /// including a missing tag, is a one-time event.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("birthday") => EventKind::Birthday,
            _ => EventKind::OneTime,
        }
    }
}

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// The stored calendar date. For birthdays only month and day matter.
    pub date: NaiveDate,
    /// Time of day as written in the source (e.g., `"09:00 AM"`). `None` means all-day.
    pub time: Option<String>,
    /// Display title.
    pub title: String,
    /// Recurrence kind derived from the `type` tag.
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// On-disk shape of an event, before validation.
#[derive(Debug, Deserialize)]
struct RawEvent {
    date: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl TryFrom<RawEvent> for Event {
    type Error = CalendarError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d").map_err(|e| {
            CalendarError::InvalidDate(format!("'{}' for event '{}': {e}", raw.date, raw.title))
        })?;

        // An empty time string renders the same as a missing one.
        let time = raw
            .time
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Event {
            date,
            time,
            title: raw.title,
            kind: EventKind::from_tag(raw.kind.as_deref()),
        })
    }
}

impl Event {
    /// Create an all-day event.
    pub fn new(date: NaiveDate, title: impl Into<String>, kind: EventKind) -> Self {
        Event {
            date,
            time: None,
            title: title.into(),
            kind,
        }
    }

    /// Attach a time of day (e.g., `"02:30 PM"`).
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn is_birthday(&self) -> bool {
        self.kind == EventKind::Birthday
    }

    /// Whether this event shows up on `date`.
    ///
    /// Birthdays match on month and day in any year; one-time events match
    /// only their exact stored date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            EventKind::Birthday => same_day_of_year(self.date, date),
            EventKind::OneTime => self.date == date,
        }
    }

    /// Whether the stored date lies inside `month`. Recurrence is not applied.
    pub fn falls_in(&self, month: YearMonth) -> bool {
        month.contains(self.date)
    }

    /// Whether this event's timed instance is already over at `now`.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        status::is_past(self.date, self.time.as_deref(), now)
    }
}

/// Month and day equal, year ignored.
pub fn same_day_of_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// Parse the static event list from a JSON array.
///
/// Source order is preserved; every query in [`crate::index`] keeps it.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidEventData`] if the document is not a JSON
/// array of event objects or any `date` is not a `YYYY-MM-DD` calendar date.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> =
        serde_json::from_str(json).map_err(|e| CalendarError::InvalidEventData(e.to_string()))?;
    tracing::debug!(count = events.len(), "parsed event source");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_events_preserves_order_and_fields() {
        let json = r#"[
            { "date": "2024-05-20", "time": "09:00 AM", "title": "Dentist", "type": "event" },
            { "date": "1990-05-12", "title": "Mom", "type": "birthday" }
        ]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Dentist");
        assert_eq!(events[0].time.as_deref(), Some("09:00 AM"));
        assert_eq!(events[0].kind, EventKind::OneTime);
        assert_eq!(events[1].date, date(1990, 5, 12));
        assert_eq!(events[1].time, None);
        assert!(events[1].is_birthday());
    }

    #[test]
    fn test_unknown_or_missing_type_is_one_time() {
        let json = r#"[
            { "date": "2024-01-01", "title": "A", "type": "meeting" },
            { "date": "2024-01-02", "title": "B" },
            { "date": "2024-01-03", "title": "C", "type": "Birthday" }
        ]"#;
        let events = parse_events(json).unwrap();
        assert!(events.iter().all(|e| e.kind == EventKind::OneTime));
    }

    #[test]
    fn test_empty_time_is_all_day() {
        let json = r#"[{ "date": "2024-01-01", "time": "  ", "title": "A" }]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events[0].time, None);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let json = r#"[{ "date": "2024-02-30", "title": "Nope" }]"#;
        let err = parse_events(json).unwrap_err().to_string();
        assert!(err.contains("Invalid event data"), "got: {err}");
        assert!(err.contains("2024-02-30"), "got: {err}");
    }

    #[test]
    fn test_non_array_is_rejected() {
        assert!(parse_events(r#"{ "date": "2024-01-01" }"#).is_err());
        assert!(parse_events("not json").is_err());
    }

    #[test]
    fn test_birthday_occurs_every_year() {
        let bday = Event::new(date(1990, 5, 12), "Mom", EventKind::Birthday);
        assert!(bday.occurs_on(date(2024, 5, 12)));
        assert!(bday.occurs_on(date(2031, 5, 12)));
        assert!(bday.occurs_on(date(1990, 5, 12)));
        assert!(!bday.occurs_on(date(2024, 5, 13)));
        assert!(!bday.occurs_on(date(2024, 6, 12)));
    }

    #[test]
    fn test_one_time_occurs_once() {
        let evt = Event::new(date(2024, 5, 12), "Launch", EventKind::OneTime);
        assert!(evt.occurs_on(date(2024, 5, 12)));
        assert!(!evt.occurs_on(date(1990, 5, 12)));
        assert!(!evt.occurs_on(date(2025, 5, 12)));
    }

    #[test]
    fn test_leap_day_birthday_only_in_leap_years() {
        let bday = Event::new(date(2000, 2, 29), "Leapling", EventKind::Birthday);
        assert!(bday.occurs_on(date(2024, 2, 29)));
        assert!(!bday.occurs_on(date(2023, 2, 28)));
        assert!(!bday.occurs_on(date(2023, 3, 1)));
    }

    #[test]
    fn test_serialize_uses_type_tag() {
        let evt = Event::new(date(1990, 5, 12), "Mom", EventKind::Birthday);
        let json = serde_json::to_value(&evt).unwrap();
        assert_eq!(json["type"], "birthday");
        assert_eq!(json["date"], "1990-05-12");
    }
}
