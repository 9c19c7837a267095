mod carousel;
mod content;
mod error;
mod topic;

pub use carousel::*;
pub use content::*;
pub use error::*;
pub use topic::*;
