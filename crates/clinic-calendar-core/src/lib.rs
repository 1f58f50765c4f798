//! Clinic Calendar Core Library
//!
//! In-memory domain core of a doctor appointment-booking calendar widget.
//!
//! # Architecture
//!
//! ```text
//!   click day / submit / edit / delete          prev / next
//!                    │                               │
//!                    ▼                               ▼
//!          ┌───────────────────┐            ┌────────────────┐
//!          │  BookingSession   │───────────▶│   YearMonth    │
//!          │  (form gate)      │            └───────┬────────┘
//!          └─────────┬─────────┘                    │
//!                    │ append / replace_at /        │
//!                    │ remove_at                    │
//!                    ▼                              ▼
//!          ┌───────────────────┐  snapshot  ┌────────────────┐
//!          │ AppointmentStore  │───────────▶│  CalendarGrid  │
//!          └─────────┬─────────┘            └───────┬────────┘
//!                    │                              │
//!                    ▼                              ▼
//!                 Sidebar                      Day cells
//! ```
//!
//! # Core Principle
//!
//! **Position is identity.** Appointments have no id; edit and delete act on
//! a store position, and grid cells carry the position of every appointment
//! they show.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, AppointmentDraft, Category, DoctorRoster)
//! - [`store`]: Ordered in-memory appointment store
//! - [`calendar`]: Month navigation and the day-cell grid
//! - [`booking`]: Session controller (form gate, edit/delete, UI flags)
//! - [`config`]: TOML configuration
//! - [`logging`]: Tracing subscriber setup

pub mod booking;
pub mod calendar;
pub mod config;
pub mod logging;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use booking::{BookingForm, BookingSession, DisplayFlags, SidebarEntry, SubmitOutcome};
pub use calendar::{CalendarGrid, CellEntry, DayCell, YearMonth};
pub use config::BookingConfig;
pub use models::{Appointment, AppointmentDraft, CalendarDay, Category, DoctorRoster, FormField};
pub use store::AppointmentStore;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<store::StoreError> for BookingError {
    fn from(e: store::StoreError) -> Self {
        match e {
            store::StoreError::IndexOutOfRange { .. } => BookingError::OutOfRange(e.to_string()),
            store::StoreError::Json(msg) => BookingError::SerializationError(msg),
        }
    }
}

impl From<calendar::CalendarError> for BookingError {
    fn from(e: calendar::CalendarError) -> Self {
        BookingError::InvalidInput(e.to_string())
    }
}

impl From<config::ConfigError> for BookingError {
    fn from(e: config::ConfigError) -> Self {
        BookingError::ConfigError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for BookingError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        BookingError::LockPoisoned(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Start a session from optional TOML configuration.
///
/// Installs the fmt subscriber with the `[logging]` filter unless the host
/// already set a global subscriber.
#[uniffi::export]
pub fn open_session(config_toml: Option<String>) -> Result<Arc<BookingCore>, BookingError> {
    let config = match config_toml {
        Some(text) => BookingConfig::from_toml_str(&text)?,
        None => BookingConfig::default(),
    };
    logging::init(&config.logging);
    let session = BookingSession::from_config(&config);
    tracing::info!(month = %session.month(), "booking session opened");
    Ok(Arc::new(BookingCore {
        session: Arc::new(Mutex::new(session)),
    }))
}

/// Install the default tracing subscriber. Returns false if one was already set.
#[uniffi::export]
pub fn init_logging(filter: Option<String>) -> bool {
    let mut config = config::LoggingConfig::default();
    if let Some(filter) = filter {
        config.filter = filter;
    }
    logging::init(&config)
}

/// The full doctor roster in picker order.
#[uniffi::export]
pub fn doctor_roster() -> Vec<String> {
    DoctorRoster::new().names().to_vec()
}

/// Category legend in display order.
#[uniffi::export]
pub fn category_legend() -> Vec<FfiLegendEntry> {
    models::legend().into_iter().map(|e| e.into()).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct BookingCore {
    session: Arc<Mutex<BookingSession>>,
}

#[uniffi::export]
impl BookingCore {
    // =========================================================================
    // Form Operations
    // =========================================================================

    /// Open a blank booking form for a `YYYY-MM-DD` day.
    pub fn click_day(&self, date: String) -> Result<(), BookingError> {
        let day = calendar::parse_day(&date)?;
        let mut session = self.session.lock()?;
        session.click_day(day);
        Ok(())
    }

    /// Open the form pre-filled with the appointment at `position`.
    pub fn begin_edit(&self, position: u32) -> Result<(), BookingError> {
        let mut session = self.session.lock()?;
        session.begin_edit(position as usize)?;
        Ok(())
    }

    /// Update one form field.
    pub fn set_field(&self, field: FfiFormField, value: String) -> Result<(), BookingError> {
        let mut session = self.session.lock()?;
        session.set_field(field.into(), value);
        Ok(())
    }

    /// Hide the form.
    pub fn close_form(&self) -> Result<(), BookingError> {
        let mut session = self.session.lock()?;
        session.close_form();
        Ok(())
    }

    /// Submit the form (book or update).
    pub fn submit(&self) -> Result<FfiSubmitOutcome, BookingError> {
        let mut session = self.session.lock()?;
        let outcome = session.submit()?;
        FfiSubmitOutcome::try_from(outcome)
    }

    /// Delete the appointment at `position`; returns the notice text.
    pub fn delete_appointment(&self, position: u32) -> Result<String, BookingError> {
        let mut session = self.session.lock()?;
        session.delete(position as usize)?;
        Ok(booking::DELETED_NOTICE.to_string())
    }

    /// Current form state.
    pub fn form_state(&self) -> Result<FfiFormState, BookingError> {
        let session = self.session.lock()?;
        FfiFormState::try_from(session.form())
    }

    // =========================================================================
    // View Operations
    // =========================================================================

    /// Grid for the current month.
    pub fn grid(&self) -> Result<FfiCalendarGrid, BookingError> {
        let session = self.session.lock()?;
        FfiCalendarGrid::try_from(session.grid())
    }

    /// Sidebar entries in store order.
    pub fn sidebar(&self) -> Result<Vec<FfiSidebarEntry>, BookingError> {
        let session = self.session.lock()?;
        session
            .sidebar()
            .into_iter()
            .map(FfiSidebarEntry::try_from)
            .collect()
    }

    /// Every appointment in store order.
    pub fn appointments(&self) -> Result<Vec<FfiAppointment>, BookingError> {
        let session = self.session.lock()?;
        Ok(session.appointments().iter().map(|a| a.into()).collect())
    }

    /// Every appointment as a JSON array.
    pub fn appointments_json(&self) -> Result<String, BookingError> {
        let session = self.session.lock()?;
        Ok(session.store().to_json()?)
    }

    /// Rank roster doctors against a picker query.
    pub fn suggest_doctors(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiDoctorSuggestion>, BookingError> {
        let session = self.session.lock()?;
        Ok(session
            .roster()
            .suggest(&query, limit as usize)
            .into_iter()
            .map(|s| FfiDoctorSuggestion {
                name: s.name,
                score: s.score,
            })
            .collect())
    }

    // =========================================================================
    // Navigation & Display Flags
    // =========================================================================

    /// Current month as `YYYY-MM`.
    pub fn current_month(&self) -> Result<String, BookingError> {
        let session = self.session.lock()?;
        Ok(session.month().to_string())
    }

    pub fn previous_month(&self) -> Result<String, BookingError> {
        let mut session = self.session.lock()?;
        Ok(session.previous_month().to_string())
    }

    pub fn next_month(&self) -> Result<String, BookingError> {
        let mut session = self.session.lock()?;
        Ok(session.next_month().to_string())
    }

    /// Jump to a `YYYY-MM` month.
    pub fn go_to_month(&self, month: String) -> Result<(), BookingError> {
        let month: YearMonth = month.parse()?;
        let mut session = self.session.lock()?;
        session.set_month(month);
        Ok(())
    }

    pub fn display_flags(&self) -> Result<FfiDisplayFlags, BookingError> {
        let session = self.session.lock()?;
        Ok(session.flags().into())
    }

    pub fn toggle_dark_mode(&self) -> Result<bool, BookingError> {
        let mut session = self.session.lock()?;
        Ok(session.toggle_dark_mode())
    }

    pub fn toggle_sidebar(&self) -> Result<bool, BookingError> {
        let mut session = self.session.lock()?;
        Ok(session.toggle_sidebar())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

fn format_day(day: chrono::NaiveDate) -> String {
    day.format(calendar::DAY_FORMAT).to_string()
}

/// Narrow a store position to the `u32` the bindings carry.
pub fn ffi_position(position: usize) -> Result<u32, BookingError> {
    u32::try_from(position)
        .map_err(|_| BookingError::OutOfRange(format!("position {position} exceeds u32")))
}

/// FFI-safe form field selector.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiFormField {
    PatientName,
    Time,
    Doctor,
    Category,
}

impl From<FfiFormField> for FormField {
    fn from(field: FfiFormField) -> Self {
        match field {
            FfiFormField::PatientName => FormField::PatientName,
            FfiFormField::Time => FormField::Time,
            FfiFormField::Doctor => FormField::Doctor,
            FfiFormField::Category => FormField::Category,
        }
    }
}

/// FFI-safe submit outcome.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum FfiSubmitOutcome {
    Booked { position: u32, notice: String },
    Updated { position: u32, notice: String },
    Ignored,
}

impl TryFrom<SubmitOutcome> for FfiSubmitOutcome {
    type Error = BookingError;

    fn try_from(outcome: SubmitOutcome) -> Result<Self, Self::Error> {
        let notice = outcome.notice().unwrap_or_default().to_string();
        Ok(match outcome {
            SubmitOutcome::Booked { position } => FfiSubmitOutcome::Booked {
                position: ffi_position(position)?,
                notice,
            },
            SubmitOutcome::Updated { position } => FfiSubmitOutcome::Updated {
                position: ffi_position(position)?,
                notice,
            },
            SubmitOutcome::Ignored => FfiSubmitOutcome::Ignored,
        })
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiAppointment {
    pub patient_name: String,
    pub time: String,
    pub doctor: String,
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub color_class: Option<String>,
}

impl From<&Appointment> for FfiAppointment {
    fn from(appt: &Appointment) -> Self {
        Self {
            patient_name: appt.patient_name.clone(),
            time: appt.time.clone(),
            doctor: appt.doctor.clone(),
            category: appt.category.clone(),
            date: format_day(appt.date),
            color_class: appt.color_class().map(str::to_string),
        }
    }
}

/// FFI-safe grid entry.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiCellEntry {
    pub position: u32,
    pub appointment: FfiAppointment,
}

/// FFI-safe day cell.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDayCell {
    pub date: String,
    pub label: String,
    pub entries: Vec<FfiCellEntry>,
}

impl TryFrom<DayCell> for FfiDayCell {
    type Error = BookingError;

    fn try_from(cell: DayCell) -> Result<Self, Self::Error> {
        let entries = cell
            .entries
            .iter()
            .map(|e| {
                Ok(FfiCellEntry {
                    position: ffi_position(e.position)?,
                    appointment: (&e.appointment).into(),
                })
            })
            .collect::<Result<Vec<_>, BookingError>>()?;
        Ok(Self {
            date: format_day(cell.date),
            label: cell.label(),
            entries,
        })
    }
}

/// FFI-safe month grid.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiCalendarGrid {
    /// `YYYY-MM`
    pub month: String,
    /// e.g. "February 2024"
    pub label: String,
    pub cells: Vec<FfiDayCell>,
}

impl TryFrom<CalendarGrid> for FfiCalendarGrid {
    type Error = BookingError;

    fn try_from(grid: CalendarGrid) -> Result<Self, Self::Error> {
        Ok(Self {
            month: grid.month().to_string(),
            label: grid.label(),
            cells: grid
                .into_cells()
                .into_iter()
                .map(FfiDayCell::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// FFI-safe sidebar entry.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSidebarEntry {
    pub position: u32,
    pub patient_name: String,
    pub doctor: String,
    pub time: String,
    pub date: String,
    pub summary: String,
}

impl TryFrom<SidebarEntry> for FfiSidebarEntry {
    type Error = BookingError;

    fn try_from(entry: SidebarEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            position: ffi_position(entry.position)?,
            patient_name: entry.patient_name,
            doctor: entry.doctor,
            time: entry.time,
            date: format_day(entry.date),
            summary: entry.summary,
        })
    }
}

/// FFI-safe legend row.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiLegendEntry {
    pub name: String,
    pub color_class: String,
    pub color_hex: String,
}

impl From<models::LegendEntry> for FfiLegendEntry {
    fn from(entry: models::LegendEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            color_class: entry.color_class.to_string(),
            color_hex: entry.color_hex.to_string(),
        }
    }
}

/// FFI-safe form state.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiFormState {
    pub open: bool,
    pub title: String,
    pub submit_label: String,
    pub selected_date: Option<String>,
    pub edit_position: Option<u32>,
    pub patient_name: String,
    pub time: String,
    pub doctor: String,
    pub category: String,
}

impl TryFrom<&BookingForm> for FfiFormState {
    type Error = BookingError;

    fn try_from(form: &BookingForm) -> Result<Self, Self::Error> {
        Ok(Self {
            open: form.open,
            title: form.title().to_string(),
            submit_label: form.submit_label().to_string(),
            selected_date: form.selected_date.map(format_day),
            edit_position: form.edit_position.map(ffi_position).transpose()?,
            patient_name: form.draft.patient_name.clone(),
            time: form.draft.time.clone(),
            doctor: form.draft.doctor.clone(),
            category: form.draft.category.clone(),
        })
    }
}

/// FFI-safe display flags.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDisplayFlags {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl From<DisplayFlags> for FfiDisplayFlags {
    fn from(flags: DisplayFlags) -> Self {
        Self {
            dark_mode: flags.dark_mode,
            sidebar_open: flags.sidebar_open,
        }
    }
}

/// FFI-safe roster suggestion.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiDoctorSuggestion {
    pub name: String,
    pub score: f64,
}
