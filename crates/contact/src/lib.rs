mod message;
mod types;

pub use message::*;
pub use types::*;
