use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowcaseError {
    #[error("a carousel needs at least one item")]
    Empty,

    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: i64, len: usize },

    #[error("unknown key: {0}")]
    UnknownKey(String),
}
