use thiserror::Error;

/// Canonical result for the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Synchronous, locally-originating failures. Nothing is retried or
/// recovered internally; every variant surfaces directly to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// `current()` was called outside the positioned state.
    #[error("Cursor is not positioned on an element: {0}")]
    InvalidState(&'static str),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Sequence contains no elements: {0}")]
    EmptySequence(&'static str),

    #[error("Sequence contains multiple matching elements: {0}")]
    MultipleMatches(&'static str),

    #[error("The key is already defined in the dictionary: {0}")]
    DuplicateKey(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}
