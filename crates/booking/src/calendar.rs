use std::{fmt, str::FromStr};

use time::{Date, Month, macros::format_description};

use crate::BookingError;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Parses a `YYYY-MM-DD` date as carried in forms and query strings.
pub fn parse_date(value: &str) -> Result<Date, BookingError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| BookingError::Parse(value.to_owned()))
}

/// "Wednesday, October 21"
pub fn day_label(date: Date) -> String {
    format!("{}, {} {}", date.weekday(), date.month(), date.day())
}

/// "Wednesday, October 21, 2026"
pub fn full_day_label(date: Date) -> String {
    format!("{}, {}", day_label(date), date.year())
}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth(Date);

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Option<Self> {
        Date::from_calendar_date(year, month, 1).ok().map(Self)
    }

    pub fn of(date: Date) -> Self {
        Self(date.replace_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        self.0.month()
    }

    pub fn first_day(&self) -> Date {
        self.0
    }

    pub fn days(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Wraps into the previous year from January. Stays put at the first representable month.
    pub fn previous(self) -> Self {
        let (year, month) = match self.month() {
            Month::January => (self.year() - 1, Month::December),
            month => (self.year(), month.previous()),
        };

        Self::new(year, month).unwrap_or(self)
    }

    pub fn next(self) -> Self {
        let (year, month) = match self.month() {
            Month::December => (self.year() + 1, Month::January),
            month => (self.year(), month.next()),
        };

        Self::new(year, month).unwrap_or(self)
    }

    /// "October 2026"
    pub fn label(&self) -> String {
        format!("{} {}", self.month(), self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month() as u8)
    }
}

impl FromStr for YearMonth {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::Parse(s.to_owned());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(invalid)?;

        Self::new(year, month).ok_or_else(invalid)
    }
}

/// One position of the 7-column, Sunday-first month grid. `date` is `None` for
/// the padding before the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: Option<Date>,
}

impl CalendarCell {
    pub const PADDING: Self = Self { date: None };

    pub fn day(date: Date) -> Self {
        Self { date: Some(date) }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }
}

/// Leading padding (weekday index of the 1st, Sunday = 0) followed by every day
/// of the month in order. No trailing padding.
pub fn month_grid(month: YearMonth) -> Vec<CalendarCell> {
    let first = month.first_day();
    let padding = first.weekday().number_days_from_sunday() as usize;
    let days = month.days();

    let mut cells = Vec::with_capacity(padding + days as usize);
    cells.extend(std::iter::repeat_n(CalendarCell::PADDING, padding));
    cells.extend(
        (1..=days)
            .filter_map(|day| first.replace_day(day).ok())
            .map(CalendarCell::day),
    );

    cells
}

/// The grid split into week rows of 7; the last row may be shorter.
pub fn month_weeks(month: YearMonth) -> Vec<Vec<CalendarCell>> {
    month_grid(month)
        .chunks(WEEKDAY_LABELS.len())
        .map(<[CalendarCell]>::to_vec)
        .collect()
}
