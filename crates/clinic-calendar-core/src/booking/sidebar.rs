//! Sidebar listing of every appointment.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::day_label;
use crate::models::Appointment;

/// One appointment as listed in the sidebar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SidebarEntry {
    pub position: usize,
    pub patient_name: String,
    pub doctor: String,
    pub time: String,
    pub date: NaiveDate,
    /// e.g. "09:00 on Feb 10"
    pub summary: String,
}

impl SidebarEntry {
    fn new(position: usize, appointment: &Appointment) -> Self {
        Self {
            position,
            patient_name: appointment.patient_name.clone(),
            doctor: appointment.doctor.clone(),
            time: appointment.time.clone(),
            date: appointment.date,
            summary: format!("{} on {}", appointment.time, day_label(appointment.date)),
        }
    }
}

/// Sidebar entries in store order.
pub fn sidebar_entries(appointments: &[Appointment]) -> Vec<SidebarEntry> {
    appointments
        .iter()
        .enumerate()
        .map(|(position, appointment)| SidebarEntry::new(position, appointment))
        .collect()
}
