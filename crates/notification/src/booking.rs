use arcalab_booking::{Booking, full_day_label};

pub fn booking_subject(booking: &Booking) -> String {
    format!(
        "Meeting booked: {} at {}",
        full_day_label(booking.date),
        booking.time
    )
}

pub fn booking_body(booking: &Booking, timezone_label: &str) -> String {
    format!(
        r#"
Date: {}
Time: {} ({})
Name: {}
Email: {}
Notes: {}
"#,
        full_day_label(booking.date),
        booking.time,
        timezone_label,
        booking.name,
        booking.email,
        booking.notes.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_booking_body() {
        let booking = Booking {
            date: date!(2026 - 10 - 26),
            time: "02:00 PM".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            notes: None,
        };

        assert_eq!(
            booking_subject(&booking),
            "Meeting booked: Monday, October 26, 2026 at 02:00 PM"
        );

        let body = booking_body(&booking, "Eastern Time");
        assert!(body.contains("Time: 02:00 PM (Eastern Time)"));
        assert!(body.contains("Notes: -"));
    }
}
