//! Month grid layout.
//!
//! A month is drawn as a 7-column grid starting on Sunday: some blank cells
//! before day 1, then one cell per day.

use chrono::Datelike;
use serde::Serialize;

use crate::cursor::YearMonth;

/// Shape of one month on a Sunday-first grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Blank cells before day 1 (weekday of day 1, Sunday = 0).
    pub leading_blanks: u32,
    /// Days in the month (28-31).
    pub day_count: u32,
}

impl MonthGrid {
    /// Total occupied cells, blanks included.
    pub fn cell_count(&self) -> u32 {
        self.leading_blanks + self.day_count
    }

    /// Rows needed to draw the month (4-6).
    pub fn week_rows(&self) -> u32 {
        self.cell_count().div_ceil(7)
    }
}

/// Compute the grid for `month`.
///
/// # Examples
///
/// ```
/// use calendar_engine::{month_grid, YearMonth};
///
/// // May 1, 2024 was a Wednesday.
/// let grid = month_grid(YearMonth::new(2024, 5).unwrap());
/// assert_eq!(grid.leading_blanks, 3);
/// assert_eq!(grid.day_count, 31);
/// ```
pub fn month_grid(month: YearMonth) -> MonthGrid {
    MonthGrid {
        leading_blanks: month.first_day().weekday().num_days_from_sunday(),
        day_count: month.day_count(),
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` (1-12) of `year`.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
