//! Day cells for one month, each paired with the appointments on that day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{day_label, YearMonth};
use crate::models::{Appointment, CalendarDay};

/// An appointment as shown in a day cell, tagged with its store position.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CellEntry {
    /// Index in the store snapshot the grid was built from
    pub position: usize,
    pub appointment: Appointment,
}

/// One calendar day and the appointments booked on it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Entries in store order
    pub entries: Vec<CellEntry>,
}

impl DayCell {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Short label, e.g. "Feb 10".
    pub fn label(&self) -> String {
        day_label(self.date)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.entries.iter().map(|e| &e.appointment)
    }
}

/// The rendered month: one cell per day, first to last, ascending.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Group a store snapshot into the days of `month`.
    ///
    /// Appointments outside the month are skipped. Relative order within a
    /// day follows the input order.
    pub fn build(month: YearMonth, appointments: &[Appointment]) -> Self {
        let mut cells: Vec<DayCell> = month.days().map(DayCell::empty).collect();

        for (position, appointment) in appointments.iter().enumerate() {
            let day = appointment.date.calendar_day();
            if !month.contains(day) {
                continue;
            }
            cells[day.day0() as usize].entries.push(CellEntry {
                position,
                appointment: appointment.clone(),
            });
        }

        tracing::debug!(
            month = %month,
            cells = cells.len(),
            appointments = appointments.len(),
            "calendar grid built"
        );

        Self { month, cells }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Header label, e.g. "February 2024".
    pub fn label(&self) -> String {
        self.month.label()
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell for a day of this month.
    pub fn cell(&self, day: impl CalendarDay) -> Option<&DayCell> {
        let day = day.calendar_day();
        if !self.month.contains(day) {
            return None;
        }
        self.cells.get(day.day0() as usize)
    }

    /// Total appointments shown across the month.
    pub fn appointment_count(&self) -> usize {
        self.cells.iter().map(|c| c.entries.len()).sum()
    }

    pub fn into_cells(self) -> Vec<DayCell> {
        self.cells
    }
}
