//! End-to-end booking scenarios over the session API.

use chrono::NaiveDate;
use clinic_calendar_core::{
    Appointment, AppointmentStore, BookingSession, CalendarGrid, FormField, SubmitOutcome,
    YearMonth,
};

fn feb_2024() -> YearMonth {
    YearMonth::new(2024, 2).unwrap()
}

fn feb(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
}

fn asha() -> Appointment {
    Appointment::new("Asha", "09:00", "Dr. Arjun Sharma", "Emergency", feb(10))
}

fn only_feb_10_holds(grid: &CalendarGrid, expected: &Appointment) {
    for cell in grid.cells() {
        if cell.date == feb(10) {
            let shown: Vec<&Appointment> = cell.appointments().collect();
            assert_eq!(shown, vec![expected]);
        } else {
            assert!(cell.is_empty(), "{} should be empty", cell.label());
        }
    }
}

#[test]
fn test_empty_store_leap_february() {
    let store = AppointmentStore::new();
    let grid = CalendarGrid::build(feb_2024(), store.all());

    assert_eq!(grid.len(), 29);
    assert!(grid.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_append_replace_remove_scenario() {
    let mut store = AppointmentStore::new();

    // Append
    store.append(asha());
    let grid = CalendarGrid::build(feb_2024(), store.all());
    only_feb_10_holds(&grid, &asha());

    // Replace at 0 with a new time
    let moved = Appointment {
        time: "10:00".into(),
        ..asha()
    };
    store.replace_at(0, moved.clone()).unwrap();
    assert_eq!(store.len(), 1);
    let grid = CalendarGrid::build(feb_2024(), store.all());
    only_feb_10_holds(&grid, &moved);
    assert_eq!(grid.cell(feb(10)).unwrap().entries[0].appointment.time, "10:00");

    // Remove at 0
    store.remove_at(0).unwrap();
    assert_eq!(store.len(), 0);
    let grid = CalendarGrid::build(feb_2024(), store.all());
    assert!(grid.cell(feb(10)).unwrap().is_empty());
}

#[test]
fn test_same_scenario_through_the_session() {
    let mut session = BookingSession::new(feb_2024());

    session.click_day(feb(10));
    session.set_field(FormField::PatientName, "Asha");
    session.set_field(FormField::Time, "09:00");
    session.set_field(FormField::Doctor, "Dr. Arjun Sharma");
    session.set_field(FormField::Category, "Emergency");
    assert_eq!(
        session.submit().unwrap(),
        SubmitOutcome::Booked { position: 0 }
    );
    only_feb_10_holds(&session.grid(), &asha());

    // Edit from the grid entry's position
    let position = session.grid().cell(feb(10)).unwrap().entries[0].position;
    session.begin_edit(position).unwrap();
    session.set_field(FormField::Time, "10:00");
    assert_eq!(
        session.submit().unwrap(),
        SubmitOutcome::Updated { position: 0 }
    );
    assert_eq!(session.appointments().len(), 1);
    assert_eq!(
        session.grid().cell(feb(10)).unwrap().entries[0].appointment.time,
        "10:00"
    );

    session.delete(position).unwrap();
    assert!(session.appointments().is_empty());
    assert!(session.grid().cell(feb(10)).unwrap().is_empty());
}

#[test]
fn test_double_booking_is_allowed() {
    let mut session = BookingSession::new(feb_2024());
    for name in ["Asha", "Bilal"] {
        session.click_day(feb(10));
        session.set_field(FormField::PatientName, name);
        session.set_field(FormField::Time, "09:00");
        session.set_field(FormField::Doctor, "Dr. Arjun Sharma");
        session.set_field(FormField::Category, "Emergency");
        session.submit().unwrap();
    }

    let cell = session.grid().cell(feb(10)).cloned().unwrap();
    assert_eq!(cell.entries.len(), 2);
    assert_eq!(cell.entries[0].appointment.patient_name, "Asha");
    assert_eq!(cell.entries[1].appointment.patient_name, "Bilal");
}

#[test]
fn test_each_missing_field_blocks_submit() {
    let fields = [
        FormField::PatientName,
        FormField::Time,
        FormField::Doctor,
        FormField::Category,
    ];
    for skipped in fields {
        let mut session = BookingSession::new(feb_2024());
        session.click_day(feb(10));
        for field in fields.iter().filter(|f| **f != skipped) {
            session.set_field(*field, "x");
        }
        assert_eq!(session.submit().unwrap(), SubmitOutcome::Ignored);
        assert!(session.appointments().is_empty());
        assert!(session.form().open);
    }
}

#[test]
fn test_appointments_in_other_months_stay_hidden_until_navigated() {
    let mut session = BookingSession::new(feb_2024());
    session.click_day(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    session.set_field(FormField::PatientName, "Chen");
    session.set_field(FormField::Time, "16:45");
    session.set_field(FormField::Doctor, "Dr. Kiran Verma");
    session.set_field(FormField::Category, "Sick Visit");
    session.submit().unwrap();

    assert_eq!(session.grid().appointment_count(), 0);
    assert_eq!(session.sidebar().len(), 1);
    assert_eq!(session.sidebar()[0].summary, "16:45 on Mar 5");

    session.next_month();
    let grid = session.grid();
    assert_eq!(grid.label(), "March 2024");
    assert_eq!(grid.len(), 31);
    assert_eq!(grid.cells()[4].entries.len(), 1);
    assert_eq!(
        grid.cells()[4].entries[0].appointment.color_class(),
        Some("bg-sky-400")
    );
}
