//! Month navigation and the calendar grid.
//!
//! The grid covers exactly the days of one month: no leading or trailing
//! days from neighbouring months, no week padding.

mod grid;
mod month;

pub use grid::*;
pub use month::*;

use thiserror::Error;

/// Calendar errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month {0:?}, expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Parse a `YYYY-MM-DD` day.
pub fn parse_day(s: &str) -> CalendarResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
        .map_err(|_| CalendarError::InvalidDate(s.to_string()))
}

/// Format used when days cross a text boundary.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Short day label, e.g. "Feb 10".
pub fn day_label(day: chrono::NaiveDate) -> String {
    day.format("%b %-d").to_string()
}
