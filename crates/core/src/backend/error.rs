use thiserror::Error;

/// Errors that can occur when talking to an event backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Event not found: {0}")]
    NotFound(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;
