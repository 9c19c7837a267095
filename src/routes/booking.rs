use std::str::FromStr;

use arcalab_booking::{
    BookingDetails, BookingError, BookingMachine, BookingSnapshot, Step, WEEKDAY_LABELS,
    full_day_label, parse_date, today_in,
};
use arcalab_contact::ContactOption;
use arcalab_shared::FieldErrors;
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use time::Date;
use validator::Validate;

use crate::{
    routes::{AppState, contact::ContactTemplate},
    template::Template,
};

/// One day of the rendered month.
pub struct DayCell {
    pub day: u8,
    pub value: String,
    pub bookable: bool,
    pub selected: bool,
    pub today: bool,
}

/// Everything the booking panel needs, flattened for the template.
pub struct BookingView {
    pub step: Step,
    pub snapshot: BookingSnapshot,
    pub month_label: String,
    pub weekdays: [&'static str; 7],
    pub weeks: Vec<Vec<Option<DayCell>>>,
    pub slots: Vec<String>,
    pub timezone_label: String,
    pub selected_day: Option<String>,
    pub errors: FieldErrors,
}

impl BookingView {
    pub fn new(machine: &BookingMachine, errors: FieldErrors) -> Self {
        let draft = machine.draft();

        let weeks = machine
            .grid()
            .chunks(WEEKDAY_LABELS.len())
            .map(|week| {
                week.iter()
                    .map(|cell| {
                        cell.date.map(|date| DayCell {
                            day: date.day(),
                            value: date.to_string(),
                            bookable: machine.is_bookable(date),
                            selected: draft.selected_date == Some(date),
                            today: date == machine.today(),
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            step: machine.step(),
            snapshot: machine.snapshot(),
            month_label: machine.month().label(),
            weekdays: WEEKDAY_LABELS,
            weeks,
            slots: machine.schedule().slots.clone(),
            timezone_label: machine.schedule().timezone_label.clone(),
            selected_day: draft.selected_date.map(full_day_label),
            errors,
        }
    }
}

/// What the visitor clicked, carried in the `intent` form field.
#[derive(Debug, PartialEq)]
pub enum Intent {
    PreviousMonth,
    NextMonth,
    SelectDate(Date),
    SelectTime(String),
    Back,
    Submit,
}

impl FromStr for Intent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let intent = match s.split_once(':') {
            Some(("select_date", date)) => Intent::SelectDate(parse_date(date)?),
            Some(("select_time", slot)) => Intent::SelectTime(slot.trim().to_owned()),
            Some(_) => anyhow::bail!("unknown booking intent: {s}"),
            None => match s {
                "prev_month" => Intent::PreviousMonth,
                "next_month" => Intent::NextMonth,
                "back" => Intent::Back,
                "submit" => Intent::Submit,
                _ => anyhow::bail!("unknown booking intent: {s}"),
            },
        };

        Ok(intent)
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct BookingForm {
    pub step: String,
    pub month: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub notes: String,
    pub intent: String,
}

impl BookingForm {
    fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            step: self.step.parse().unwrap_or_default(),
            month: self.month.to_owned(),
            date: self.date.to_owned(),
            time: self.time.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            notes: self.notes.to_owned(),
        }
    }
}

#[tracing::instrument(skip_all, fields(step = %input.step, intent = %input.intent))]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<BookingForm>,
) -> impl IntoResponse {
    let mut machine = BookingMachine::restore(
        &input.snapshot(),
        today_in(&app.config.booking.timezone),
        app.config.booking.schedule(),
    );

    let mut errors = FieldErrors::default();
    let mut notice = None;

    let applied = match input.intent.parse::<Intent>() {
        Ok(Intent::PreviousMonth) => machine.previous_month(),
        Ok(Intent::NextMonth) => machine.next_month(),
        Ok(Intent::SelectDate(date)) => machine.select_date(date),
        Ok(Intent::SelectTime(slot)) => machine.select_time(&slot),
        Ok(Intent::Back) => {
            machine.back();
            Ok(())
        }
        Ok(Intent::Submit) => {
            let details = BookingDetails::new(&input.name, &input.email, &input.notes);

            match details.validate() {
                Ok(()) => machine
                    .update_details(details)
                    .and_then(|_| machine.submit())
                    .map(|booking| {
                        notice = Some(format!(
                            "Booking confirmed for {} at {} {}",
                            full_day_label(booking.date),
                            booking.time,
                            machine.schedule().timezone_label
                        ));

                        arcalab_notification::spawn_booking_confirmed(
                            app.notifier.clone(),
                            booking,
                        );
                    }),
                Err(validation) => {
                    errors = FieldErrors::from(&validation);
                    Ok(())
                }
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "unknown intent");
            Ok(())
        }
    };

    match applied {
        Ok(()) => {}
        Err(BookingError::Incomplete(fields)) => {
            for field in fields {
                errors.insert(field, "This field is required");
            }
        }
        Err(err) => tracing::debug!(error = %err, "booking intent rejected"),
    }

    let mut page = ContactTemplate::new(
        ContactOption::Calendar,
        BookingView::new(&machine, errors),
    );
    page.notice = notice;

    template.render(page)
}
