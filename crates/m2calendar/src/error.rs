//! Controller error types.

use thiserror::Error;
use uuid::Uuid;

use m2calendar_core::backend::BackendError;
use m2calendar_core::calendar::ValidationError;

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Errors surfaced by create, edit, delete, load and sync.
///
/// Every variant has already been reported to the user through the
/// notification host by the time the caller sees it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
