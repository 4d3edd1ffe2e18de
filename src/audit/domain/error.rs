//! Error types for audit snapshot construction.

use crate::task::domain::TaskStatus;
use thiserror::Error;

/// Errors returned while deriving audit snapshots.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditDomainError {
    /// The task is not completed, so no completion snapshot can be taken.
    #[error("task must be completed to create a completion log, got {status:?}")]
    TaskNotCompleted {
        /// Status the task actually had.
        status: TaskStatus,
    },

    /// The title snapshot is empty or whitespace-only.
    #[error("title snapshot must not be blank")]
    BlankTitleSnapshot,

    /// The title snapshot exceeds the storage length limit.
    #[error("title snapshot length must be <= 255, got {0}")]
    TitleSnapshotTooLong(usize),

    /// The progress percentage exceeds 100.
    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),

    /// The hard-deletion instant precedes the trashing instant.
    #[error("hard_deleted_at must be >= trashed_at")]
    HardDeleteBeforeTrash,
}
