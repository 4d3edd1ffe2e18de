//! Error types for task queue validation.

use thiserror::Error;

/// Errors returned while constructing a task queue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueueDomainError {
    /// The name is empty or whitespace-only.
    #[error("queue name must not be blank")]
    BlankName,

    /// The name exceeds the permitted length.
    #[error("queue name length must be <= 100, got {0}")]
    NameTooLong(usize),

    /// The description exceeds the permitted length.
    #[error("queue description length must be <= 500, got {0}")]
    DescriptionTooLong(usize),

    /// The capacity limit is zero.
    #[error("max tasks must be > 0")]
    ZeroMaxTasks,
}
