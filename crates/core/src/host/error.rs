use thiserror::Error;

/// Errors raised by a host bridge.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The embedding host is absent or stopped answering.
    #[error("Host bridge unavailable: {0}")]
    Unavailable(String),
    /// The terminal or dialog could not collect an answer.
    #[error("Dialog failed: {0}")]
    Dialog(String),
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
