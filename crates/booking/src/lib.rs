mod availability;
mod calendar;
mod error;
mod machine;
mod schedule;

pub use availability::*;
pub use calendar::*;
pub use error::*;
pub use machine::*;
pub use schedule::*;
