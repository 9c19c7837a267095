use arcalab_booking::Booking;
use arcalab_contact::ContactMessage;
use async_trait::async_trait;

use crate::{EmailService, booking_body, booking_subject, message_body, message_subject};

/// Where confirmed bookings and contact messages go. Delivery is best effort:
/// one attempt, no retry, nothing stored.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn booking_confirmed(&self, booking: &Booking) -> anyhow::Result<()>;

    async fn message_received(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

/// Records submissions as structured log events.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn booking_confirmed(&self, booking: &Booking) -> anyhow::Result<()> {
        tracing::info!(
            date = %booking.date,
            time = %booking.time,
            name = %booking.name,
            email = %booking.email,
            notes = booking.notes.as_deref().unwrap_or_default(),
            "Meeting scheduled"
        );

        Ok(())
    }

    async fn message_received(&self, message: &ContactMessage) -> anyhow::Result<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "Contact form submitted"
        );

        Ok(())
    }
}

/// Mails every submission to the studio contact address.
#[derive(Clone)]
pub struct EmailNotifier {
    service: EmailService,
    to: String,
    timezone_label: String,
}

impl EmailNotifier {
    pub fn new(
        service: EmailService,
        to: impl Into<String>,
        timezone_label: impl Into<String>,
    ) -> Self {
        Self {
            service,
            to: to.into(),
            timezone_label: timezone_label.into(),
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn booking_confirmed(&self, booking: &Booking) -> anyhow::Result<()> {
        self.service
            .send_plain(
                &self.to,
                booking_subject(booking),
                booking_body(booking, &self.timezone_label),
            )
            .await
    }

    async fn message_received(&self, message: &ContactMessage) -> anyhow::Result<()> {
        self.service
            .send_plain(&self.to, message_subject(message), message_body(message))
            .await
    }
}
