//! Error types for trash retention validation.

use crate::task::domain::TaskStatus;
use thiserror::Error;

/// Errors returned while constructing or mutating trash items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrashDomainError {
    /// The retention duration is zero or negative.
    #[error("duration must be > 0")]
    NonPositiveRetention,

    /// The retention end would precede the trashing instant.
    #[error("retention_until must be >= trashed_at")]
    RetentionBeforeTrashed,

    /// The referenced task has not been trashed.
    #[error("task status must be trashed to create a trash item, got {status:?}")]
    TaskNotTrashed {
        /// Status the task actually had.
        status: TaskStatus,
    },
}
