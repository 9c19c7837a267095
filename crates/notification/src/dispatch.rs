use std::sync::Arc;

use arcalab_booking::Booking;
use arcalab_contact::ContactMessage;
use tokio::task::JoinHandle;

use crate::Notifier;

/// Hands the booking to the notifier without waiting for delivery.
pub fn spawn_booking_confirmed(notifier: Arc<dyn Notifier>, booking: Booking) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = notifier.booking_confirmed(&booking).await {
            tracing::error!(error = %err, date = %booking.date, "failed to deliver booking");
        }
    })
}

/// Hands the message to the notifier without waiting for delivery.
pub fn spawn_message_received(
    notifier: Arc<dyn Notifier>,
    message: ContactMessage,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(err) = notifier.message_received(&message).await {
            tracing::error!(error = %err, email = %message.email, "failed to deliver message");
        }
    })
}
