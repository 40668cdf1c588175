/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failure to reach the store at construction time
    #[error("database connection error: {0}")]
    Connection(String),

    /// Driver-level fault while executing an operation
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    /// Document encoding error
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}
