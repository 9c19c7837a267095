pub mod appearance;
pub mod assets;
pub mod cli;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
