//! In-memory appointment store.
//!
//! The store is an ordered sequence and position is the only identity an
//! appointment has. Every mutation builds a new sequence and swaps it in, so
//! a [`Snapshot`] taken earlier never changes underneath its reader.

use std::sync::Arc;

use thiserror::Error;

use crate::models::Appointment;

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Position {index} out of range (store holds {len} appointments)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("JSON serialization error: {0}")]
    Json(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Immutable view of the store at one point in time.
pub type Snapshot = Arc<[Appointment]>;

/// Ordered, in-memory sequence of appointments.
#[derive(Debug, Clone)]
pub struct AppointmentStore {
    appointments: Snapshot,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            appointments: Arc::from(Vec::new()),
        }
    }

    /// Current sequence, in insertion order.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Shared handle to the current sequence.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.appointments)
    }

    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.appointments.get(index)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Add an appointment at the end.
    pub fn append(&mut self, appointment: Appointment) {
        let mut next = self.appointments.to_vec();
        next.push(appointment);
        self.swap(next);
        tracing::info!(position = self.len() - 1, len = self.len(), "appointment appended");
    }

    /// Overwrite the appointment at `index`.
    pub fn replace_at(&mut self, index: usize, appointment: Appointment) -> StoreResult<()> {
        self.check_index(index)?;
        let mut next = self.appointments.to_vec();
        next[index] = appointment;
        self.swap(next);
        tracing::info!(position = index, len = self.len(), "appointment replaced");
        Ok(())
    }

    /// Remove the appointment at `index`, shifting later ones left.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<Appointment> {
        self.check_index(index)?;
        let mut next = self.appointments.to_vec();
        let removed = next.remove(index);
        self.swap(next);
        tracing::info!(position = index, len = self.len(), "appointment removed");
        Ok(removed)
    }

    /// Serialize the current sequence as a JSON array.
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string(&*self.appointments).map_err(|e| StoreError::Json(e.to_string()))
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.len() {
            tracing::warn!(index, len = self.len(), "positional access out of range");
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn swap(&mut self, next: Vec<Appointment>) {
        self.appointments = Arc::from(next);
    }
}
