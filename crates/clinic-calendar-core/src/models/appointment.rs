//! Appointment models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Anything that can be pinned to a single calendar day.
///
/// Time-of-day and offset information is dropped: a `DateTime` is reduced to
/// the wall-clock date in its own timezone.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// A booked appointment.
///
/// Appointments carry no identifier; their position in the store is their
/// only identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Patient name as typed in the form
    pub patient_name: String,
    /// Wall-clock time (e.g., "09:00"), kept as entered
    pub time: String,
    /// Doctor name from the roster
    pub doctor: String,
    /// Category display name (e.g., "Routine Checkup")
    pub category: String,
    /// Day of the appointment
    pub date: NaiveDate,
}

impl Appointment {
    /// Build an appointment directly, bypassing the form gate.
    pub fn new(
        patient_name: impl Into<String>,
        time: impl Into<String>,
        doctor: impl Into<String>,
        category: impl Into<String>,
        date: impl CalendarDay,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            time: time.into(),
            doctor: doctor.into(),
            category: category.into(),
            date: date.calendar_day(),
        }
    }

    /// Resolve the category text against the known categories.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Display class of the category, if it is a known one.
    pub fn color_class(&self) -> Option<&'static str> {
        self.category_kind().map(|c| c.color_class())
    }

    /// Check whether this appointment falls on the given day.
    pub fn is_on(&self, day: impl CalendarDay) -> bool {
        self.date == day.calendar_day()
    }

    /// Draft pre-filled with this appointment's fields (for editing).
    pub fn to_draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            patient_name: self.patient_name.clone(),
            time: self.time.clone(),
            doctor: self.doctor.clone(),
            category: self.category.clone(),
        }
    }
}

/// A single editable field of the booking form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormField {
    PatientName,
    Time,
    Doctor,
    Category,
}

/// Booking form contents before they are committed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub time: String,
    pub doctor: String,
    pub category: String,
}

impl AppointmentDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::PatientName => self.patient_name = value,
            FormField::Time => self.time = value,
            FormField::Doctor => self.doctor = value,
            FormField::Category => self.category = value,
        }
    }

    /// Read one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PatientName => &self.patient_name,
            FormField::Time => &self.time,
            FormField::Doctor => &self.doctor,
            FormField::Category => &self.category,
        }
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            FormField::PatientName,
            FormField::Time,
            FormField::Doctor,
            FormField::Category,
        ]
        .into_iter()
        .filter(|f| self.get(*f).is_empty())
        .collect()
    }

    /// True when every required field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn the draft into an appointment on the given day.
    ///
    /// Returns `None` when any field is empty. No other validation happens.
    pub fn commit(&self, date: impl CalendarDay) -> Option<Appointment> {
        if !self.is_complete() {
            return None;
        }
        Some(Appointment {
            patient_name: self.patient_name.clone(),
            time: self.time.clone(),
            doctor: self.doctor.clone(),
            category: self.category.clone(),
            date: date.calendar_day(),
        })
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
