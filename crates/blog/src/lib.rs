//! Blog posts written in markdown with YAML front matter.
//!
//! Markdown is parsed into a small document tree, then rendered to escaped
//! HTML in a separate pass.

mod document;
mod error;
mod parse;
mod render;
mod store;

pub use document::*;
pub use error::*;
pub use parse::*;
pub use render::*;
pub use store::*;
