use arcalab_booking::{
    BookingDetails, BookingError, BookingMachine, BookingSnapshot, Schedule, Step, YearMonth,
    is_bookable,
};
use time::{Date, Month, macros::date};

// Wednesday
const TODAY: Date = date!(2026 - 10 - 21);

#[test]
fn booking_full_flow() -> anyhow::Result<()> {
    let mut machine = BookingMachine::new(TODAY, Schedule::default());

    machine.select_date(date!(2026 - 10 - 22))?;
    assert_eq!(machine.step(), Step::Time);

    machine.select_time("10:30 AM")?;
    assert_eq!(machine.step(), Step::Details);

    machine.update_details(BookingDetails::new("Ada", "ada@example.com", "Studio tour"))?;
    let booking = machine.submit()?;

    assert_eq!(booking.date, date!(2026 - 10 - 22));
    assert_eq!(booking.time, "10:30 AM");
    assert_eq!(booking.notes.as_deref(), Some("Studio tour"));
    assert_eq!(machine.step(), Step::Calendar);
    assert!(machine.draft().selected_date.is_none());

    Ok(())
}

#[test]
fn booking_flow_across_form_round_trips() -> anyhow::Result<()> {
    let schedule = Schedule::default();

    let mut machine = BookingMachine::new(TODAY, schedule.clone());
    machine.next_month()?;
    let snapshot = machine.snapshot();
    assert_eq!(snapshot.month, "2026-11");

    let mut machine = BookingMachine::restore(&snapshot, TODAY, schedule.clone());
    machine.select_date(date!(2026 - 11 - 03))?;

    let mut machine = BookingMachine::restore(&machine.snapshot(), TODAY, schedule.clone());
    machine.select_time("03:30 PM")?;

    let mut machine = BookingMachine::restore(&machine.snapshot(), TODAY, schedule);
    assert_eq!(machine.step(), Step::Details);
    machine.update_details(BookingDetails::new("Ada", "ada@example.com", ""))?;

    let booking = machine.submit()?;
    assert_eq!(booking.date, date!(2026 - 11 - 03));
    assert_eq!(booking.notes, None);

    Ok(())
}

#[test]
fn no_weekend_or_past_day_is_ever_selectable() {
    let month = YearMonth::new(2026, Month::October).unwrap();

    for cell in arcalab_booking::month_grid(month) {
        let Some(date) = cell.date else {
            continue;
        };

        let mut machine = BookingMachine::new(TODAY, Schedule::default());
        let result = machine.select_date(date);

        assert_eq!(result.is_ok(), is_bookable(date, TODAY), "{date}");
        if result.is_err() {
            assert_eq!(result, Err(BookingError::Unavailable { date }));
            assert_eq!(machine.step(), Step::Calendar);
        }
    }
}

#[test]
fn tampered_snapshot_cannot_reach_details() {
    let snapshot = BookingSnapshot {
        step: Step::Details,
        month: "2026-10".to_owned(),
        date: "2026-10-25".to_owned(),
        time: "10:00 AM".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        notes: String::new(),
    };

    let mut machine = BookingMachine::restore(&snapshot, TODAY, Schedule::default());

    assert_eq!(machine.step(), Step::Calendar);
    assert!(matches!(machine.submit(), Err(BookingError::WrongStep { .. })));
}

#[test]
fn custom_schedule_limits_slots() -> anyhow::Result<()> {
    let schedule = Schedule {
        slots: vec!["09:00 AM".to_owned()],
        timezone_label: "Central European Time".to_owned(),
    };
    let mut machine = BookingMachine::new(TODAY, schedule);
    machine.select_date(TODAY)?;

    assert!(machine.select_time("10:00 AM").is_err());
    machine.select_time("09:00 AM")?;
    assert_eq!(machine.step(), Step::Details);

    Ok(())
}
