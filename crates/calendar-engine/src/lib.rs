//! # calendar-engine
//!
//! Deterministic computation behind a single-page month calendar.
//!
//! Given a displayed month, a static event list, an optional selected day,
//! and an explicit "now", the engine produces the grid layout, the events
//! that belong in each day cell, and the passed/today/selected flags. It
//! performs no I/O and never reads the system clock.
//!
//! ## Modules
//!
//! - [`event`] — Event records, the birthday/one-time kind, JSON event source
//! - [`cursor`] — Validated `YearMonth` and the navigable `CalendarCursor`
//! - [`grid`] — Leading blanks and day count for a month
//! - [`index`] — Per-day, per-month, and birthday queries over the event list
//! - [`status`] — `is_past`, `is_today`, `is_selected`, and `SelectionState`
//! - [`view`] — Serializable month grid and agenda panel for a rendering shell
//! - [`error`] — Error types

pub mod cursor;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod status;
pub mod view;

pub use cursor::{CalendarCursor, YearMonth, MONTH_NAMES, WEEKDAY_LABELS};
pub use error::CalendarError;
pub use event::{parse_events, Event, EventKind};
pub use grid::{is_leap_year, month_grid, MonthGrid};
pub use index::{birthdays_for_day, events_for_day, events_for_month};
pub use status::{is_past, is_selected, is_today, parse_event_time, SelectionState};
pub use view::{today_banner, AgendaEntry, AgendaPanel, CellEvent, DayCell, MonthView};
