//! Per-render status predicates: passed, today, selected.
//!
//! "Now" is always an explicit argument; nothing here reads the system clock.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Format of an event's time of day: 12-hour clock with an AM/PM marker.
const EVENT_TIME_FORMAT: &str = "%I:%M %p";

/// Whether a timed event on `date` at `time` is over at `now`.
///
/// All-day events (`time` is `None`) are never past. A `time` that does not
/// parse as `hh:mm AM`/`hh:mm PM` is treated as never past.
///
/// # Examples
///
/// ```
/// use calendar_engine::is_past;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let now = day.and_hms_opt(10, 0, 0).unwrap();
/// assert!(is_past(day, Some("09:00 AM"), now));
/// assert!(!is_past(day, None, now));
/// ```
pub fn is_past(date: NaiveDate, time: Option<&str>, now: NaiveDateTime) -> bool {
    let Some(time) = time else {
        return false;
    };
    match parse_event_time(time) {
        Some(t) => now > date.and_time(t),
        None => {
            tracing::debug!(%date, time, "unparseable event time, treating as not past");
            false
        }
    }
}

/// Parse an event time such as `"09:00 AM"` or `"2:30 pm"`.
pub fn parse_event_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), EVENT_TIME_FORMAT).ok()
}

/// Whether `date` is the calendar day of `now`.
pub fn is_today(date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date()
}

/// Whether `date` is the selected day.
pub fn is_selected(date: NaiveDate, selection: &SelectionState) -> bool {
    selection.selected() == Some(date)
}

// ── SelectionState ──────────────────────────────────────────────────────────

/// The day the user clicked, if any. Independent of the displayed month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected: Option<NaiveDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }
}

impl From<Option<NaiveDate>> for SelectionState {
    fn from(selected: Option<NaiveDate>) -> Self {
        SelectionState { selected }
    }
}
