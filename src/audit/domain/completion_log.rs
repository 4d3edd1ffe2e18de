//! Completion snapshot record.

use super::AuditDomainError;
use crate::entity::{Entity, Persisted};
use crate::queue::domain::TaskQueueId;
use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_TITLE_SNAPSHOT_LENGTH: usize = 255;

/// Surrogate identifier for a persisted completion log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLogId(i64);

impl CompletionLogId {
    /// Wraps a storage-assigned identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompletionLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of a task at the moment it was completed.
///
/// One per task, enforced by storage. Exposes no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionLog {
    completed_at: DateTime<Utc>,
    title_snapshot: String,
    progress: u8,
    queue: TaskQueueId,
    task: TaskId,
}

impl CompletionLog {
    /// Derives a completion snapshot from a completed task.
    ///
    /// The completion instant is taken from the task, falling back to the
    /// clock's current instant when the task carries none.
    ///
    /// # Errors
    ///
    /// Returns [`AuditDomainError::TaskNotCompleted`] when the task is not
    /// completed, or a validation error when the snapshot fields violate
    /// their limits.
    pub fn from_task(
        task: &Persisted<Task>,
        clock: &impl Clock,
    ) -> Result<Self, AuditDomainError> {
        if task.status() != TaskStatus::Completed {
            return Err(AuditDomainError::TaskNotCompleted {
                status: task.status(),
            });
        }
        let completed_at = task.completed_at().unwrap_or_else(|| clock.utc());
        Self::create(
            task.id(),
            task.queue(),
            completed_at,
            task.title(),
            task.progress(),
        )
    }

    /// Creates a completion snapshot from raw field values.
    ///
    /// # Errors
    ///
    /// Returns an [`AuditDomainError`] when the title snapshot is blank or
    /// too long, or the progress exceeds 100.
    pub fn create(
        task: TaskId,
        queue: TaskQueueId,
        completed_at: DateTime<Utc>,
        title_snapshot: &str,
        progress: u8,
    ) -> Result<Self, AuditDomainError> {
        if title_snapshot.trim().is_empty() {
            return Err(AuditDomainError::BlankTitleSnapshot);
        }
        let length = title_snapshot.chars().count();
        if length > MAX_TITLE_SNAPSHOT_LENGTH {
            return Err(AuditDomainError::TitleSnapshotTooLong(length));
        }
        if progress > 100 {
            return Err(AuditDomainError::InvalidProgress(progress));
        }
        Ok(Self {
            completed_at,
            title_snapshot: title_snapshot.to_owned(),
            progress,
            queue,
            task,
        })
    }

    /// Returns the completion instant.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Returns the title as it read at completion time.
    #[must_use]
    pub fn title_snapshot(&self) -> &str {
        &self.title_snapshot
    }

    /// Returns the progress at completion time.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the owning queue's identifier at completion time.
    #[must_use]
    pub const fn queue(&self) -> TaskQueueId {
        self.queue
    }

    /// Returns the completed task's identifier.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }
}

impl Entity for CompletionLog {
    type Id = CompletionLogId;
}
