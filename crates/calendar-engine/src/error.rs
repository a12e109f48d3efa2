//! Error types for calendar-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid event data: {0}")]
    InvalidEventData(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
