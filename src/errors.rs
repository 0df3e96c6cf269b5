use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("parent case not found: {0}")]
    ParentNotFound(String),

    #[error("case not found: {0}")]
    ContactNotFound(String),

    #[error("case id already registered: {0}")]
    DuplicateContact(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
