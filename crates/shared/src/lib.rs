mod command;
mod form;

pub use command::*;
pub use form::*;
