//! Domain models for the clinic calendar.

mod appointment;
mod category;
mod doctor;

pub use appointment::*;
pub use category::*;
pub use doctor::*;
