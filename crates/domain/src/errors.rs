use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Iterator is not ready, reset the iterator")]
    IteratorNotReady,

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid record class: {0}")]
    InvalidRecordClass(String),
}
