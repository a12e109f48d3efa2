//! Plain render model for a calendar shell.
//!
//! [`MonthView`] is the grid on the right, [`AgendaPanel`] the summary on the
//! left. Both are rebuilt from scratch on every interaction from the event
//! list, the cursor, the selection, and "now". They carry display labels but
//! no markup, and serialize to JSON as-is.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::cursor::{CalendarCursor, YearMonth, WEEKDAY_LABELS};
use crate::event::{Event, EventKind};
use crate::grid::{month_grid, MonthGrid};
use crate::index::{birthdays_for_day, events_for_day, events_for_month};
use crate::status::{is_selected, is_today, SelectionState};

/// An event as shown inside a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellEvent {
    pub title: String,
    pub time: Option<String>,
    pub kind: EventKind,
    /// `"09:00 AM - Dentist"` for timed events, `"🎉 Mom"` for all-day ones.
    pub label: String,
}

impl From<&Event> for CellEvent {
    fn from(event: &Event) -> Self {
        let label = match &event.time {
            Some(time) => format!("{time} - {}", event.title),
            None => format!("🎉 {}", event.title),
        };
        CellEvent {
            title: event.title.clone(),
            time: event.time.clone(),
            kind: event.kind,
            label,
        }
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month, starting at 1.
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub events: Vec<CellEvent>,
}

/// The month grid for the cursor's month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: YearMonth,
    /// `"May 2024"`.
    pub title: String,
    pub weekdays: [&'static str; 7],
    pub grid: MonthGrid,
    pub days: Vec<DayCell>,
}

impl MonthView {
    pub fn build(
        events: &[Event],
        cursor: &CalendarCursor,
        selection: &SelectionState,
        now: NaiveDateTime,
    ) -> Self {
        let month = cursor.year_month();
        let days = month
            .days()
            .map(|date| DayCell {
                day: date.day(),
                date,
                is_today: is_today(date, now),
                is_selected: is_selected(date, selection),
                events: events_for_day(events, date)
                    .into_iter()
                    .map(CellEvent::from)
                    .collect(),
            })
            .collect();

        MonthView {
            month,
            title: month.to_string(),
            weekdays: WEEKDAY_LABELS,
            grid: month_grid(month),
            days,
        }
    }

    /// Grid rows of seven slots; `None` is a blank cell before day 1 or after
    /// the last day.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let blanks = self.grid.leading_blanks as usize;
        let slots: Vec<Option<&DayCell>> = std::iter::repeat_n(None, blanks)
            .chain(self.days.iter().map(Some))
            .collect();

        slots
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// An entry in the month summary list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEntry {
    pub date: NaiveDate,
    pub title: String,
    pub time: Option<String>,
    /// The timed instance is already over at "now".
    pub passed: bool,
    /// `"May 20: Dentist 09:00 AM"`.
    pub label: String,
}

/// The left-hand summary: this month's events and today's birthdays.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaPanel {
    /// `"Events in May 2024"`.
    pub heading: String,
    pub month_events: Vec<AgendaEntry>,
    /// Titles of birthdays falling on today's month and day.
    pub birthdays_today: Vec<String>,
}

impl AgendaPanel {
    pub fn build(events: &[Event], cursor: &CalendarCursor, now: NaiveDateTime) -> Self {
        let month = cursor.year_month();
        let month_events = events_for_month(events, month)
            .into_iter()
            .map(|event| AgendaEntry {
                date: event.date,
                title: event.title.clone(),
                time: event.time.clone(),
                passed: event.is_past(now),
                label: agenda_label(event),
            })
            .collect();
        let birthdays_today = birthdays_for_day(events, now.date())
            .into_iter()
            .map(|event| event.title.clone())
            .collect();

        AgendaPanel {
            heading: format!("Events in {month}"),
            month_events,
            birthdays_today,
        }
    }
}

fn agenda_label(event: &Event) -> String {
    let day = event.date.format("%b %-d");
    match &event.time {
        Some(time) => format!("{day}: {} {time}", event.title),
        None => format!("{day}: {}", event.title),
    }
}

/// Long form of today's date, e.g. `"Monday, May 20, 2024"`.
pub fn today_banner(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}
