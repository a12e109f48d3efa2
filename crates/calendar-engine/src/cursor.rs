//! The displayed month and how the shell moves it.
//!
//! [`YearMonth`] is a validated (year, month) pair; once constructed it is
//! always a representable month, so grid and index functions that take one
//! never fail. [`CalendarCursor`] is the shell-owned pointer to the month on
//! screen, moved only by explicit navigation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{CalendarError, Result};
use crate::grid;

/// English month names, January first, as offered by the month picker.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// How many years the year picker offers on each side of the current one.
const YEAR_CHOICE_SPAN: i32 = 10;

// ── YearMonth ───────────────────────────────────────────────────────────────

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1-12, or
    /// [`CalendarError::InvalidYear`] if the year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))?;
        Ok(YearMonth { first })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of days in this month (28-31).
    pub fn day_count(&self) -> u32 {
        grid::days_in_month(self.year(), self.month())
    }

    /// Every date of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.day_count() as usize)
    }

    /// Whether `date` lies in this exact month and year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month, wrapping December into January. `None` past
    /// chrono's last representable year.
    pub fn succ(&self) -> Option<Self> {
        match self.month() {
            12 => YearMonth::new(self.year().checked_add(1)?, 1).ok(),
            m => YearMonth::new(self.year(), m + 1).ok(),
        }
    }

    /// The preceding month, wrapping January into December.
    pub fn pred(&self) -> Option<Self> {
        match self.month() {
            1 => YearMonth::new(self.year().checked_sub(1)?, 12).ok(),
            m => YearMonth::new(self.year(), m - 1).ok(),
        }
    }

    /// English month name (e.g., `"May"`).
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0()]
    }

    fn month0(&self) -> usize {
        self.first.month0() as usize
    }
}

impl fmt::Display for YearMonth {
    /// `"May 2024"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

impl From<YearMonth> for String {
    /// `"2024-05"`.
    fn from(ym: YearMonth) -> String {
        format!("{:04}-{:02}", ym.year(), ym.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parse `"YYYY-MM"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidDate(format!("expected YYYY-MM, got '{s}'"));
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month)
    }
}

// ── CalendarCursor ──────────────────────────────────────────────────────────

/// The month currently shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    current: YearMonth,
}

impl CalendarCursor {
    pub fn new(current: YearMonth) -> Self {
        CalendarCursor { current }
    }

    /// A cursor on the month containing `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        CalendarCursor::new(YearMonth::of(now.date()))
    }

    pub fn year_month(&self) -> YearMonth {
        self.current
    }

    /// Step back one month. Stays put at the first representable month.
    pub fn prev(&mut self) {
        if let Some(ym) = self.current.pred() {
            self.current = ym;
        }
    }

    /// Step forward one month. Stays put at the last representable month.
    pub fn next(&mut self) {
        if let Some(ym) = self.current.succ() {
            self.current = ym;
        }
    }

    /// Move `months` steps; negative goes back.
    pub fn shift(&mut self, months: i32) {
        for _ in 0..months.unsigned_abs() {
            if months < 0 {
                self.prev();
            } else {
                self.next();
            }
        }
    }

    /// Show `month` (1-12) of the current year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1-12.
    pub fn jump_to_month(&mut self, month: u32) -> Result<()> {
        self.current = YearMonth::new(self.current.year(), month)?;
        Ok(())
    }

    /// Show the current month of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside chrono's range.
    pub fn jump_to_year(&mut self, year: i32) -> Result<()> {
        self.current = YearMonth::new(year, self.current.month())?;
        Ok(())
    }

    /// The years offered by the year picker: ten before the current year
    /// through ten after, ascending.
    pub fn year_choices(&self) -> Vec<i32> {
        let year = self.current.year();
        (year - YEAR_CHOICE_SPAN..=year + YEAR_CHOICE_SPAN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn test_year_month_rejects_out_of_range_month() {
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(CalendarError::InvalidMonth(0))
        ));
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_year_month_rejects_unrepresentable_year() {
        assert!(matches!(
            YearMonth::new(i32::MAX, 1),
            Err(CalendarError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_year_month_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        assert_eq!(YearMonth::of(date), ym(2024, 5));
        assert!(ym(2024, 5).contains(date));
        assert!(!ym(2023, 5).contains(date));
    }

    #[test]
    fn test_year_month_display_and_parse() {
        assert_eq!(ym(2024, 5).to_string(), "May 2024");
        assert_eq!(String::from(ym(2024, 5)), "2024-05");
        assert_eq!("2024-05".parse::<YearMonth>().unwrap(), ym(2024, 5));
        assert_eq!("1999-12".parse::<YearMonth>().unwrap(), ym(1999, 12));
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("May 2024".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_days_iterates_whole_month() {
        let days: Vec<NaiveDate> = ym(2024, 2).days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_cursor_wraps_across_year_boundary() {
        let mut cursor = CalendarCursor::new(ym(2024, 12));
        cursor.next();
        assert_eq!(cursor.year_month(), ym(2025, 1));
        cursor.prev();
        cursor.prev();
        assert_eq!(cursor.year_month(), ym(2024, 11));
    }

    #[test]
    fn test_cursor_shift() {
        let mut cursor = CalendarCursor::new(ym(2024, 5));
        cursor.shift(-17);
        assert_eq!(cursor.year_month(), ym(2022, 12));
        cursor.shift(17);
        assert_eq!(cursor.year_month(), ym(2024, 5));
        cursor.shift(0);
        assert_eq!(cursor.year_month(), ym(2024, 5));
    }

    #[test]
    fn test_cursor_jumps_keep_other_component() {
        let mut cursor = CalendarCursor::new(ym(2024, 5));
        cursor.jump_to_month(11).unwrap();
        assert_eq!(cursor.year_month(), ym(2024, 11));
        cursor.jump_to_year(1999).unwrap();
        assert_eq!(cursor.year_month(), ym(1999, 11));
        assert!(cursor.jump_to_month(13).is_err());
        assert_eq!(cursor.year_month(), ym(1999, 11));
    }

    #[test]
    fn test_cursor_at_now() {
        let now = NaiveDate::from_ymd_opt(2026, 2, 18)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(CalendarCursor::at(now).year_month(), ym(2026, 2));
    }

    #[test]
    fn test_year_choices_span_21_years() {
        let cursor = CalendarCursor::new(ym(2024, 5));
        let years = cursor.year_choices();
        assert_eq!(years.len(), 21);
        assert_eq!(years.first(), Some(&2014));
        assert_eq!(years.last(), Some(&2034));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(ym(2024, 1).month_name(), "January");
        assert_eq!(ym(2024, 12).month_name(), "December");
    }
}
