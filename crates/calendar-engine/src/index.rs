//! Event lookup by day and by month.
//!
//! All queries borrow from the caller's event slice and keep source order.
//! Two matching rules are in play:
//!
//! - **Day-of-year**: birthdays recur yearly, so only month and day are compared.
//! - **Exact date**: everything else, and every month-level query, compares
//!   the stored date as-is.
//!
//! The month summary therefore lists a birthday only in the month and year it
//! was stored under; the per-day and birthday queries pick it up every year.

use chrono::NaiveDate;

use crate::cursor::YearMonth;
use crate::event::{same_day_of_year, Event, EventKind};

/// Events to show in the cell for `date`.
///
/// # Examples
///
/// ```
/// use calendar_engine::{events_for_day, Event, EventKind};
/// use chrono::NaiveDate;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let events = vec![
///     Event::new(d(1990, 5, 12), "Mom", EventKind::Birthday),
///     Event::new(d(2024, 5, 12), "Launch", EventKind::OneTime),
/// ];
///
/// assert_eq!(events_for_day(&events, d(2024, 5, 12)).len(), 2);
/// assert_eq!(events_for_day(&events, d(2031, 5, 12)).len(), 1);
/// ```
pub fn events_for_day(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let matched: Vec<&Event> = events.iter().filter(|e| e.occurs_on(date)).collect();
    tracing::trace!(%date, matched = matched.len(), "events for day");
    matched
}

/// Events whose stored date falls in `month`, birthdays included only in
/// their stored year.
pub fn events_for_month(events: &[Event], month: YearMonth) -> Vec<&Event> {
    let matched: Vec<&Event> = events.iter().filter(|e| e.falls_in(month)).collect();
    tracing::trace!(%month, matched = matched.len(), "events for month");
    matched
}

/// Birthdays recurring on `date`'s month and day.
pub fn birthdays_for_day(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| match e.kind {
            EventKind::Birthday => same_day_of_year(e.date, date),
            EventKind::OneTime => false,
        })
        .collect()
}
