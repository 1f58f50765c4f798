//! Booking session: the widget's interaction flow over the store.
//!
//! Flow: click a day → fill the form → submit (book or update); edit and
//! delete act on store positions taken from the grid or the sidebar.

mod form;
mod sidebar;

pub use form::*;
pub use sidebar::*;

use serde::Serialize;

use crate::calendar::{CalendarGrid, YearMonth};
use crate::config::BookingConfig;
use crate::models::{legend, Appointment, CalendarDay, DoctorRoster, FormField, LegendEntry};
use crate::store::{AppointmentStore, StoreError, StoreResult};

/// Notice shown after a successful delete.
pub const DELETED_NOTICE: &str = "Appointment deleted";

/// Result of submitting the booking form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended at `position`
    Booked { position: usize },
    /// Replaced the appointment at `position`
    Updated { position: usize },
    /// A required field or the date was missing; nothing changed
    Ignored,
}

impl SubmitOutcome {
    /// Confirmation text for the host's notification area.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Booked { .. } => Some("Appointment booked"),
            SubmitOutcome::Updated { .. } => Some("Appointment updated"),
            SubmitOutcome::Ignored => None,
        }
    }
}

/// Pure UI flags with no effect on the data.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DisplayFlags {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
        }
    }
}

/// One user's booking session.
#[derive(Debug, Clone)]
pub struct BookingSession {
    store: AppointmentStore,
    month: YearMonth,
    form: BookingForm,
    flags: DisplayFlags,
    roster: DoctorRoster,
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}

impl BookingSession {
    /// Empty session showing `month`.
    pub fn new(month: YearMonth) -> Self {
        Self {
            store: AppointmentStore::new(),
            month,
            form: BookingForm::default(),
            flags: DisplayFlags::default(),
            roster: DoctorRoster::new(),
        }
    }

    /// Session with the configured start month and display flags.
    pub fn from_config(config: &BookingConfig) -> Self {
        let mut session = Self::new(config.start_month());
        session.flags = DisplayFlags {
            dark_mode: config.display.dark_mode,
            sidebar_open: config.display.sidebar_open,
        };
        session
    }

    // =========================================================================
    // Read side
    // =========================================================================

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.store.all()
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn roster(&self) -> &DoctorRoster {
        &self.roster
    }

    /// Grid for the current month, built from the current store snapshot.
    pub fn grid(&self) -> CalendarGrid {
        CalendarGrid::build(self.month, &self.store.snapshot())
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.store.all())
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend()
    }

    // =========================================================================
    // Form
    // =========================================================================

    /// Open a blank booking form for the clicked day.
    pub fn click_day(&mut self, day: impl CalendarDay) {
        let day = day.calendar_day();
        self.form.selected_date = Some(day);
        self.form.reset();
        self.form.open = true;
        tracing::debug!(%day, "booking form opened");
    }

    /// Open the form pre-filled with the appointment at `position`.
    pub fn begin_edit(&mut self, position: usize) -> StoreResult<()> {
        let appointment = self.store.get(position).ok_or(StoreError::IndexOutOfRange {
            index: position,
            len: self.store.len(),
        })?;
        self.form.selected_date = Some(appointment.date);
        self.form.draft = appointment.to_draft();
        self.form.edit_position = Some(position);
        self.form.open = true;
        tracing::debug!(position, "edit form opened");
        Ok(())
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.draft.set(field, value);
    }

    /// Hide the form without discarding what was typed.
    pub fn close_form(&mut self) {
        self.form.open = false;
    }

    /// Commit the form.
    ///
    /// With any required field empty (or no selected day) this does nothing
    /// and reports [`SubmitOutcome::Ignored`]; the form stays as it was.
    pub fn submit(&mut self) -> StoreResult<SubmitOutcome> {
        let committed = self
            .form
            .selected_date
            .and_then(|date| self.form.draft.commit(date));

        let Some(appointment) = committed else {
            tracing::debug!(
                missing = ?self.form.draft.missing_fields(),
                has_date = self.form.selected_date.is_some(),
                "submit ignored"
            );
            return Ok(SubmitOutcome::Ignored);
        };

        let outcome = match self.form.edit_position {
            Some(position) => {
                self.store.replace_at(position, appointment)?;
                SubmitOutcome::Updated { position }
            }
            None => {
                self.store.append(appointment);
                SubmitOutcome::Booked {
                    position: self.store.len() - 1,
                }
            }
        };

        self.form.reset();
        self.form.open = false;
        Ok(outcome)
    }

    /// Delete the appointment at `position`.
    ///
    /// An open edit of a later appointment follows it down one slot; an open
    /// edit of the deleted appointment is abandoned.
    pub fn delete(&mut self, position: usize) -> StoreResult<Appointment> {
        let removed = self.store.remove_at(position)?;

        if let Some(editing) = self.form.edit_position {
            if editing == position {
                self.form.reset();
                self.form.open = false;
            } else if editing > position {
                self.form.edit_position = Some(editing - 1);
            }
        }
        Ok(removed)
    }

    // =========================================================================
    // Navigation and flags
    // =========================================================================

    pub fn previous_month(&mut self) -> YearMonth {
        self.month = self.month.previous();
        tracing::debug!(month = %self.month, "navigated back");
        self.month
    }

    pub fn next_month(&mut self) -> YearMonth {
        self.month = self.month.next();
        tracing::debug!(month = %self.month, "navigated forward");
        self.month
    }

    pub fn set_month(&mut self, month: YearMonth) {
        self.month = month;
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.flags.dark_mode = !self.flags.dark_mode;
        self.flags.dark_mode
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.flags.sidebar_open = !self.flags.sidebar_open;
        self.flags.sidebar_open
    }
}
