use arcalab_booking::{BookingMachine, BookingSnapshot, Step, today_in};
use arcalab_contact::{ContactOption, SubmitMessageInput};
use arcalab_shared::FieldErrors;
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    routes::{AppState, booking::BookingView},
    template::{ServerTemplate, Template, filters},
};

pub const MESSAGE_SENT: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Default)]
pub struct MessageForm {
    pub input: SubmitMessageInput,
    pub errors: FieldErrors,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub option: ContactOption,
    pub booking: BookingView,
    pub message: MessageForm,
    pub notice: Option<String>,
}

impl ContactTemplate {
    pub fn new(option: ContactOption, booking: BookingView) -> Self {
        Self {
            option,
            booking,
            message: MessageForm::default(),
            notice: None,
        }
    }
}

/// A fresh calendar starting on today's month in the studio timezone.
pub(crate) fn fresh_machine(app: &AppState) -> BookingMachine {
    BookingMachine::restore(
        &BookingSnapshot::default(),
        today_in(&app.config.booking.timezone),
        app.config.booking.schedule(),
    )
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub option: Option<String>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let option = query
        .option
        .as_deref()
        .and_then(|option| option.parse::<ContactOption>().ok())
        .unwrap_or_default();

    let booking = BookingView::new(&fresh_machine(&app), FieldErrors::default());

    template.render(ContactTemplate::new(option, booking))
}

#[tracing::instrument(skip_all)]
pub async fn message(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<SubmitMessageInput>,
) -> impl IntoResponse {
    let booking = BookingView::new(&fresh_machine(&app), FieldErrors::default());
    let mut page = ContactTemplate::new(ContactOption::Form, booking);

    match arcalab_contact::submit_message(input.clone()) {
        Ok(message) => {
            arcalab_notification::spawn_message_received(app.notifier.clone(), message);
            page.notice = Some(MESSAGE_SENT.to_owned());
        }
        Err(arcalab_shared::Error::Validate(errors)) => {
            tracing::debug!(error = %errors, "message rejected");
            page.message = MessageForm {
                input,
                errors: FieldErrors::from(&errors),
            };
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to submit message");

            return template
                .render_status(StatusCode::INTERNAL_SERVER_ERROR, ServerTemplate)
                .into_response();
        }
    }

    template.render(page).into_response()
}
