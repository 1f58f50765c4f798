//! Reference month for the calendar view.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{CalendarError, CalendarResult};
use crate::models::CalendarDay;

/// A calendar month (year + month), stored as its first and last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
    last: NaiveDate,
}

impl YearMonth {
    /// Month with the given year and month number (1-12).
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::containing)
            .ok_or_else(|| CalendarError::InvalidMonth(format!("{year:04}-{month:02}")))
    }

    /// Month that contains the given day.
    pub fn containing(day: impl CalendarDay) -> Self {
        let day = day.calendar_day();
        let first = day - Days::new(u64::from(day.day0()));
        // Only the final representable month has no successor
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self { first, last }
    }

    /// Month containing today's local date.
    pub fn current() -> Self {
        Self::containing(chrono::Local::now())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Day 1 of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    pub fn days_in_month(&self) -> u32 {
        self.last.day()
    }

    /// Every day of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    /// Check whether a day falls inside this month.
    pub fn contains(&self, day: impl CalendarDay) -> bool {
        let day = day.calendar_day();
        self.first <= day && day <= self.last
    }

    /// The following month.
    ///
    /// Saturates at the last month chrono can represent.
    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// The preceding month.
    ///
    /// Saturates at the first month chrono can represent.
    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    /// Shift by a signed number of months, clamped to chrono's date range.
    pub fn shift(&self, months: i32) -> Self {
        let step = Months::new(months.unsigned_abs());
        if months >= 0 {
            self.first
                .checked_add_months(step)
                .map(Self::containing)
                .unwrap_or_else(|| Self::containing(NaiveDate::MAX))
        } else {
            self.first
                .checked_sub_months(step)
                .map(Self::containing)
                .unwrap_or_else(|| Self::containing(NaiveDate::MIN))
        }
    }

    /// Header label, e.g. "February 2024".
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}
