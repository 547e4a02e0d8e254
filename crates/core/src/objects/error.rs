use thiserror::Error;

/// Errors that can occur while reading from an object store.
///
/// A missing object is not an error: stores return `Ok(None)` for it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Object store request failed: {0}")]
    Backend(String),
    #[error("Failed to read object body: {0}")]
    Body(String),
}

/// Result type for object store operations.
pub type Result<T> = std::result::Result<T, ObjectStoreError>;
