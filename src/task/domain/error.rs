//! Error types for task lifecycle validation and parsing.

use crate::queue::domain::TaskQueueId;
use thiserror::Error;

/// Errors returned while constructing or mutating tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty or whitespace-only.
    #[error("title must not be blank")]
    BlankTitle,

    /// The progress percentage exceeds 100.
    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(u8),

    /// The deferral length is zero days.
    #[error("defer days must be > 0")]
    ZeroDeferDays,

    /// Moving a task across queues is blocked by policy; reordering only
    /// works within the owning queue.
    #[error("cross-queue move is not permitted: task belongs to queue {from}, target is {to}")]
    CrossQueueMove {
        /// Queue the task belongs to.
        from: TaskQueueId,
        /// Queue the caller tried to move the task into.
        to: TaskQueueId,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
