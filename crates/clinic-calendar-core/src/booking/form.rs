//! Booking form state.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::AppointmentDraft;

/// Whether the form creates a new appointment or edits an existing one.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FormMode {
    Book,
    Edit { position: usize },
}

/// State behind the booking dialog.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct BookingForm {
    pub draft: AppointmentDraft,
    /// Day the appointment will be booked on
    pub selected_date: Option<NaiveDate>,
    /// Store position being edited, if any
    pub edit_position: Option<usize>,
    pub open: bool,
}

impl BookingForm {
    pub fn mode(&self) -> FormMode {
        match self.edit_position {
            Some(position) => FormMode::Edit { position },
            None => FormMode::Book,
        }
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self.mode() {
            FormMode::Book => "Book Appointment",
            FormMode::Edit { .. } => "Edit Appointment",
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Book => "Book Appointment",
            FormMode::Edit { .. } => "Update Appointment",
        }
    }

    /// Clear the draft and the edit position. The selected date is kept.
    pub(crate) fn reset(&mut self) {
        self.draft.clear();
        self.edit_position = None;
    }
}
