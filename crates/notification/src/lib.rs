mod booking;
mod contact;
mod dispatch;
mod notifier;
mod service;

pub use booking::*;
pub use contact::*;
pub use dispatch::*;
pub use notifier::*;
pub use service::*;
