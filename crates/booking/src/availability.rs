use time::{Date, OffsetDateTime, Weekday};
use time_tz::{ToTimezone, timezones};

/// Bookable means today or later, Monday through Friday.
///
/// Both dates are calendar dates, so time of day never takes part in the
/// comparison. This is a static rule; no external calendar is consulted.
pub fn is_bookable(date: Date, today: Date) -> bool {
    date >= today && !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Current calendar date in the given IANA timezone, UTC when the name is unknown.
pub fn today_in(timezone: &str) -> Date {
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(timezone) {
        Some(tz) => now.to_timezone(tz).date(),
        None => {
            tracing::warn!(timezone, "unknown timezone, falling back to UTC");
            now.date()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    // Wednesday
    const TODAY: Date = date!(2026 - 10 - 21);

    #[test]
    fn test_past_monday_is_unavailable() {
        assert!(!is_bookable(date!(2026 - 10 - 19), TODAY));
    }

    #[test]
    fn test_weekend_is_unavailable() {
        assert!(!is_bookable(date!(2026 - 10 - 24), TODAY));
        assert!(!is_bookable(date!(2026 - 10 - 25), TODAY));
    }

    #[test]
    fn test_next_monday_is_available() {
        assert!(is_bookable(date!(2026 - 10 - 26), TODAY));
    }

    #[test]
    fn test_today_is_available_on_weekdays() {
        assert!(is_bookable(TODAY, TODAY));
        assert!(!is_bookable(date!(2026 - 10 - 24), date!(2026 - 10 - 24)));
    }

    #[test]
    fn test_today_in_unknown_timezone_uses_utc() {
        assert_eq!(today_in("Nowhere/Atlantis"), OffsetDateTime::now_utc().date());
    }
}
