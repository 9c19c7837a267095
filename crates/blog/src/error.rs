use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlogError {
    #[error("{path}: missing or invalid front matter")]
    FrontMatter { path: String },

    #[error("{path}: invalid date {value}")]
    Date { path: String, value: String },

    #[error("{path}: not valid UTF-8")]
    Encoding { path: String },

    #[error("duplicate slug {0}")]
    DuplicateSlug(String),
}
