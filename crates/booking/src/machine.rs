use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::Date;
use validator::Validate;

use crate::{BookingError, CalendarCell, Schedule, YearMonth, is_bookable, month_grid, parse_date};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Calendar,
    Time,
    Details,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookingDraft {
    pub selected_date: Option<Date>,
    pub selected_time: Option<String>,
    pub name: String,
    pub email: String,
    pub notes: String,
}

impl BookingDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = vec![];

        if self.selected_date.is_none() {
            missing.push("date");
        }
        if self.selected_time.is_none() {
            missing.push("time");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }

        missing
    }

    pub fn is_submit_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }

    fn to_booking(&self) -> Result<Booking, BookingError> {
        match (self.selected_date, &self.selected_time) {
            (Some(date), Some(time)) if self.is_submit_ready() => Ok(Booking {
                date,
                time: time.to_owned(),
                name: self.name.trim().to_owned(),
                email: self.email.trim().to_owned(),
                notes: Some(self.notes.trim())
                    .filter(|notes| !notes.is_empty())
                    .map(str::to_owned),
            }),
            _ => Err(BookingError::Incomplete(self.missing_fields())),
        }
    }
}

/// A confirmed booking, handed to the notification sink on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub date: Date,
    pub time: String,
    pub name: String,
    pub email: String,
    pub notes: Option<String>,
}

/// Contact details typed on the last step.
#[derive(Debug, Default, Clone, Validate, Deserialize)]
pub struct BookingDetails {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 2000, message = "Notes are limited to 2000 characters"))]
    pub notes: String,
}

impl BookingDetails {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            email: email.into().trim().to_owned(),
            notes: notes.into().trim().to_owned(),
        }
    }
}

/// Flat, form-friendly form of the machine. Empty strings mean "unset".
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSnapshot {
    #[serde(default)]
    pub step: Step,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

/// Calendar -> Time -> Details, then submit back to Calendar.
///
/// Every transition either applies completely or returns an error and leaves
/// the machine untouched.
#[derive(Debug, Clone)]
pub struct BookingMachine {
    step: Step,
    month: YearMonth,
    draft: BookingDraft,
    today: Date,
    schedule: Schedule,
}

impl BookingMachine {
    pub fn new(today: Date, schedule: Schedule) -> Self {
        Self {
            step: Step::Calendar,
            month: YearMonth::of(today),
            draft: BookingDraft::default(),
            today,
            schedule,
        }
    }

    /// Rebuilds a machine from a snapshot, dropping whatever no longer holds:
    /// a date that is not bookable today, a slot that is not offered, or a step
    /// whose prerequisites are missing.
    pub fn restore(snapshot: &BookingSnapshot, today: Date, schedule: Schedule) -> Self {
        let mut machine = Self::new(today, schedule);

        let date = parse_date(&snapshot.date)
            .ok()
            .filter(|date| is_bookable(*date, today));

        let slot = Some(snapshot.time.trim())
            .filter(|slot| date.is_some() && machine.schedule.offers(slot))
            .map(str::to_owned);

        machine.month = snapshot
            .month
            .parse()
            .ok()
            .or(date.map(YearMonth::of))
            .unwrap_or(machine.month);

        machine.step = match (snapshot.step, date.is_some(), slot.is_some()) {
            (Step::Details, true, true) => Step::Details,
            (Step::Details | Step::Time, true, _) => Step::Time,
            _ => Step::Calendar,
        };

        machine.draft = BookingDraft {
            selected_date: date,
            selected_time: slot,
            name: snapshot.name.trim().to_owned(),
            email: snapshot.email.trim().to_owned(),
            notes: snapshot.notes.trim().to_owned(),
        };

        machine
    }

    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            step: self.step,
            month: self.month.to_string(),
            date: self
                .draft
                .selected_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            time: self.draft.selected_time.clone().unwrap_or_default(),
            name: self.draft.name.to_owned(),
            email: self.draft.email.to_owned(),
            notes: self.draft.notes.to_owned(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn is_bookable(&self, date: Date) -> bool {
        is_bookable(date, self.today)
    }

    pub fn grid(&self) -> Vec<CalendarCell> {
        month_grid(self.month)
    }

    fn expect_step(&self, step: Step, action: &'static str) -> Result<(), BookingError> {
        if self.step != step {
            return Err(BookingError::WrongStep {
                action,
                step: self.step,
            });
        }

        Ok(())
    }

    pub fn previous_month(&mut self) -> Result<(), BookingError> {
        self.expect_step(Step::Calendar, "change month")?;
        self.month = self.month.previous();

        Ok(())
    }

    pub fn next_month(&mut self) -> Result<(), BookingError> {
        self.expect_step(Step::Calendar, "change month")?;
        self.month = self.month.next();

        Ok(())
    }

    pub fn select_date(&mut self, date: Date) -> Result<(), BookingError> {
        self.expect_step(Step::Calendar, "select a date")?;

        if !self.is_bookable(date) {
            return Err(BookingError::Unavailable { date });
        }

        if self.draft.selected_date != Some(date) {
            self.draft.selected_time = None;
        }

        self.draft.selected_date = Some(date);
        self.month = YearMonth::of(date);
        self.step = Step::Time;

        Ok(())
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), BookingError> {
        self.expect_step(Step::Time, "select a time")?;

        if !self.schedule.offers(slot) {
            return Err(BookingError::UnknownSlot(slot.to_owned()));
        }

        self.draft.selected_time = Some(slot.to_owned());
        self.step = Step::Details;

        Ok(())
    }

    /// Details -> Time -> Calendar. Keeps the draft so the previous choice stays highlighted.
    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Calendar | Step::Time => Step::Calendar,
            Step::Details => Step::Time,
        };
    }

    pub fn update_details(&mut self, details: BookingDetails) -> Result<(), BookingError> {
        self.expect_step(Step::Details, "edit details")?;

        self.draft.name = details.name;
        self.draft.email = details.email;
        self.draft.notes = details.notes;

        Ok(())
    }

    /// Finalizes the draft and starts over on the calendar.
    pub fn submit(&mut self) -> Result<Booking, BookingError> {
        self.expect_step(Step::Details, "submit")?;

        let booking = self.draft.to_booking()?;

        self.draft = BookingDraft::default();
        self.step = Step::Calendar;

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    // Wednesday
    const TODAY: Date = date!(2026 - 10 - 21);

    fn machine() -> BookingMachine {
        BookingMachine::new(TODAY, Schedule::default())
    }

    fn at_details() -> BookingMachine {
        let mut machine = machine();
        machine.select_date(date!(2026 - 10 - 26)).unwrap();
        machine.select_time("02:00 PM").unwrap();
        machine
    }

    #[test]
    fn test_starts_on_calendar_for_current_month() {
        let machine = machine();
        assert_eq!(machine.step(), Step::Calendar);
        assert_eq!(machine.month().to_string(), "2026-10");
        assert_eq!(machine.draft(), &BookingDraft::default());
    }

    #[test]
    fn test_unavailable_date_is_rejected_without_change() {
        let mut machine = machine();

        let err = machine.select_date(date!(2026 - 10 - 24)).unwrap_err();
        assert_eq!(err, BookingError::Unavailable { date: date!(2026 - 10 - 24) });
        assert_eq!(machine.step(), Step::Calendar);
        assert_eq!(machine.draft().selected_date, None);

        assert!(machine.select_date(date!(2026 - 10 - 19)).is_err());
        assert_eq!(machine.step(), Step::Calendar);
    }

    #[test]
    fn test_available_date_moves_to_time() {
        let mut machine = machine();
        machine.select_date(date!(2026 - 10 - 26)).unwrap();

        assert_eq!(machine.step(), Step::Time);
        assert_eq!(machine.draft().selected_date, Some(date!(2026 - 10 - 26)));
    }

    #[test]
    fn test_selecting_date_in_later_month_follows_it() {
        let mut machine = machine();
        machine.next_month().unwrap();
        machine.select_date(date!(2026 - 11 - 02)).unwrap();

        assert_eq!(machine.month().to_string(), "2026-11");
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let mut machine = machine();
        machine.select_date(date!(2026 - 10 - 26)).unwrap();

        assert_eq!(
            machine.select_time("11:00 PM"),
            Err(BookingError::UnknownSlot("11:00 PM".to_owned()))
        );
        assert_eq!(machine.step(), Step::Time);
        assert_eq!(machine.draft().selected_time, None);
    }

    #[test]
    fn test_back_keeps_the_draft() {
        let mut machine = at_details();

        machine.back();
        assert_eq!(machine.step(), Step::Time);
        assert_eq!(machine.draft().selected_time.as_deref(), Some("02:00 PM"));

        machine.back();
        assert_eq!(machine.step(), Step::Calendar);
        assert_eq!(machine.draft().selected_date, Some(date!(2026 - 10 - 26)));

        machine.back();
        assert_eq!(machine.step(), Step::Calendar);
    }

    #[test]
    fn test_picking_another_date_clears_the_slot() {
        let mut machine = at_details();
        machine.back();
        machine.back();

        machine.select_date(date!(2026 - 10 - 27)).unwrap();
        assert_eq!(machine.draft().selected_time, None);
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let mut machine = machine();

        assert!(matches!(
            machine.select_time("10:00 AM"),
            Err(BookingError::WrongStep { .. })
        ));
        assert!(matches!(machine.submit(), Err(BookingError::WrongStep { .. })));
        assert_eq!(machine.step(), Step::Calendar);
    }

    #[test]
    fn test_month_navigation_only_on_calendar() {
        let mut machine = at_details();
        assert!(machine.next_month().is_err());
        assert_eq!(machine.month().to_string(), "2026-10");
    }

    #[test]
    fn test_submit_with_empty_email_keeps_draft() {
        let mut machine = at_details();
        machine
            .update_details(BookingDetails::new("Ada", "", "hello"))
            .unwrap();

        assert_eq!(
            machine.submit(),
            Err(BookingError::Incomplete(vec!["email"]))
        );
        assert_eq!(machine.step(), Step::Details);
        assert_eq!(machine.draft().name, "Ada");
        assert_eq!(machine.draft().notes, "hello");
        assert_eq!(machine.draft().selected_time.as_deref(), Some("02:00 PM"));
    }

    #[test]
    fn test_full_flow_resets_after_submit() {
        let mut machine = at_details();
        machine
            .update_details(BookingDetails::new(" Ada ", "ada@example.com", ""))
            .unwrap();

        let booking = machine.submit().unwrap();

        assert_eq!(
            booking,
            Booking {
                date: date!(2026 - 10 - 26),
                time: "02:00 PM".to_owned(),
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                notes: None,
            }
        );
        assert_eq!(machine.step(), Step::Calendar);
        assert_eq!(machine.draft(), &BookingDraft::default());
    }

    #[test]
    fn test_snapshot_round_trip_keeps_state() {
        let mut machine = at_details();
        machine
            .update_details(BookingDetails::new("Ada", "ada@example.com", "notes"))
            .unwrap();

        let restored = BookingMachine::restore(&machine.snapshot(), TODAY, Schedule::default());
        assert_eq!(restored.step(), Step::Details);
        assert_eq!(restored.draft(), machine.draft());
        assert_eq!(restored.month(), machine.month());
    }

    #[test]
    fn test_restore_falls_back_to_consistent_step() {
        let snapshot = BookingSnapshot {
            step: Step::Details,
            date: "2026-10-26".to_owned(),
            time: "09:00 PM".to_owned(),
            ..Default::default()
        };
        let machine = BookingMachine::restore(&snapshot, TODAY, Schedule::default());
        assert_eq!(machine.step(), Step::Time);
        assert_eq!(machine.draft().selected_time, None);

        let snapshot = BookingSnapshot {
            step: Step::Time,
            date: "2026-10-24".to_owned(),
            time: "10:00 AM".to_owned(),
            ..Default::default()
        };
        let machine = BookingMachine::restore(&snapshot, TODAY, Schedule::default());
        assert_eq!(machine.step(), Step::Calendar);
        assert_eq!(machine.draft().selected_date, None);
        assert_eq!(machine.draft().selected_time, None);
    }

    #[test]
    fn test_restore_ignores_garbage_month() {
        let snapshot = BookingSnapshot {
            month: "not-a-month".to_owned(),
            ..Default::default()
        };
        let machine = BookingMachine::restore(&snapshot, TODAY, Schedule::default());
        assert_eq!(machine.month(), YearMonth::of(TODAY));
        assert_eq!(machine.step(), Step::Calendar);
    }

    #[test]
    fn test_details_validation() {
        assert!(BookingDetails::new("Ada", "ada@example.com", "").validate().is_ok());
        assert!(BookingDetails::new("  ", "ada@example.com", "").validate().is_err());
        assert!(BookingDetails::new("Ada", "ada", "").validate().is_err());
    }
}
