//! Property tests for the store, the grid and month navigation.

use chrono::{Datelike, NaiveDate};
use clinic_calendar_core::{Appointment, AppointmentDraft, AppointmentStore, CalendarGrid, YearMonth};
use proptest::prelude::*;

fn year_month() -> impl Strategy<Value = YearMonth> {
    (1i32..9999, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn day_near_2024() -> impl Strategy<Value = NaiveDate> {
    (2023i32..=2025, 1u32..=12)
        .prop_flat_map(|(y, m)| {
            let days = YearMonth::new(y, m).unwrap().days_in_month();
            (Just(y), Just(m), 1..=days)
        })
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn appointment() -> impl Strategy<Value = Appointment> {
    (
        "[A-Za-z]{1,8}",
        "[0-2][0-9]:[0-5][0-9]",
        prop::sample::select(vec!["Dr. Arjun Sharma", "Dr. Ravi Patel", "Dr. Simran Gupta"]),
        prop::sample::select(vec!["Emergency", "Examination", "Sick Visit"]),
        day_near_2024(),
    )
        .prop_map(|(name, time, doctor, category, date)| {
            Appointment::new(name, time, doctor, category, date)
        })
}

fn store_of(appointments: &[Appointment]) -> AppointmentStore {
    let mut store = AppointmentStore::new();
    for a in appointments {
        store.append(a.clone());
    }
    store
}

proptest! {
    #[test]
    fn append_grows_by_one_and_ends_with_it(
        existing in prop::collection::vec(appointment(), 0..8),
        new in appointment(),
    ) {
        let mut store = store_of(&existing);
        let before = store.len();
        store.append(new.clone());
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(store.all().last(), Some(&new));
    }

    #[test]
    fn incomplete_draft_never_commits(
        name in prop::option::of("[a-z]{1,5}"),
        time in prop::option::of("[0-9]{2}:[0-9]{2}"),
        doctor in prop::option::of("Dr\\. [A-Z][a-z]{2,6}"),
        category in prop::option::of("[A-Z][a-z]{3,8}"),
        date in day_near_2024(),
    ) {
        let complete = name.is_some() && time.is_some() && doctor.is_some() && category.is_some();
        let draft = AppointmentDraft {
            patient_name: name.unwrap_or_default(),
            time: time.unwrap_or_default(),
            doctor: doctor.unwrap_or_default(),
            category: category.unwrap_or_default(),
        };
        prop_assert_eq!(draft.commit(date).is_some(), complete);
    }

    #[test]
    fn replace_at_overwrites_in_place(
        existing in prop::collection::vec(appointment(), 1..8),
        replacement in appointment(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_of(&existing);
        let i = pick.index(existing.len());
        store.replace_at(i, replacement.clone()).unwrap();

        prop_assert_eq!(store.len(), existing.len());
        prop_assert_eq!(&store.all()[i], &replacement);
        for (j, a) in existing.iter().enumerate().filter(|(j, _)| *j != i) {
            prop_assert_eq!(&store.all()[j], a);
        }
    }

    #[test]
    fn remove_at_keeps_relative_order(
        existing in prop::collection::vec(appointment(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_of(&existing);
        let i = pick.index(existing.len());
        let removed = store.remove_at(i).unwrap();

        let mut expected = existing.clone();
        let expected_removed = expected.remove(i);
        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(store.all(), expected.as_slice());
    }

    #[test]
    fn out_of_range_positions_are_rejected(
        existing in prop::collection::vec(appointment(), 0..5),
        extra in 0usize..5,
        replacement in appointment(),
    ) {
        let mut store = store_of(&existing);
        let i = existing.len() + extra;
        prop_assert!(store.replace_at(i, replacement).is_err());
        prop_assert!(store.remove_at(i).is_err());
        prop_assert_eq!(store.all(), existing.as_slice());
    }

    #[test]
    fn grid_covers_exactly_the_month(month in year_month()) {
        let grid = CalendarGrid::build(month, &[]);
        let cells = grid.cells();

        let expected = NaiveDate::from_ymd_opt(month.year(), month.month(), 1)
            .unwrap()
            .iter_days()
            .take_while(|d| d.month() == month.month())
            .count();
        prop_assert_eq!(cells.len(), expected);
        prop_assert_eq!(cells.len() as u32, month.days_in_month());
        prop_assert_eq!(cells[0].date.day(), 1);
        prop_assert_eq!(cells[0].date, month.first_day());
        prop_assert_eq!(cells[cells.len() - 1].date, month.last_day());
        prop_assert!(cells.windows(2).all(|w| w[0].date.succ_opt() == Some(w[1].date)));
    }

    #[test]
    fn appointment_in_cell_iff_same_day(
        appointments in prop::collection::vec(appointment(), 0..20),
        year in 2023i32..=2025,
        month in 1u32..=12,
    ) {
        let month = YearMonth::new(year, month).unwrap();
        let grid = CalendarGrid::build(month, &appointments);

        for cell in grid.cells() {
            let expected: Vec<usize> = appointments
                .iter()
                .enumerate()
                .filter(|(_, a)| a.date == cell.date)
                .map(|(i, _)| i)
                .collect();
            let shown: Vec<usize> = cell.entries.iter().map(|e| e.position).collect();
            prop_assert_eq!(shown, expected);
            for entry in &cell.entries {
                prop_assert_eq!(&entry.appointment, &appointments[entry.position]);
            }
        }

        let in_month = appointments.iter().filter(|a| month.contains(a.date)).count();
        prop_assert_eq!(grid.appointment_count(), in_month);
    }

    #[test]
    fn navigation_round_trips(month in year_month()) {
        prop_assert_eq!(month.previous().next(), month);
        prop_assert_eq!(month.next().previous(), month);
        prop_assert!(month.previous() < month);
        prop_assert!(month < month.next());
    }

    #[test]
    fn shift_is_reversible(month in year_month(), by in -120_000i32..120_000) {
        prop_assert_eq!(month.shift(by).shift(-by), month);
        prop_assert_eq!(month.shift(by), {
            let total = month.year() * 12 + month.month() as i32 - 1 + by;
            YearMonth::new(total.div_euclid(12), total.rem_euclid(12) as u32 + 1).unwrap()
        });
    }

    #[test]
    fn month_text_round_trips(month in year_month()) {
        prop_assert_eq!(month.to_string().parse::<YearMonth>(), Ok(month));
    }
}
