use thiserror::Error;
use time::Date;

use crate::Step;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("{date} is not available for booking")]
    Unavailable { date: Date },

    #[error("{0} is not an offered time slot")]
    UnknownSlot(String),

    #[error("cannot {action} during the {step} step")]
    WrongStep { action: &'static str, step: Step },

    #[error("missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("invalid date: {0}")]
    Parse(String),
}
