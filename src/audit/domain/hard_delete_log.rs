//! Hard-deletion audit record.

use super::AuditDomainError;
use crate::entity::{Entity, Persisted};
use crate::task::domain::TaskId;
use crate::trash::domain::TrashItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted hard-delete log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskHardDeleteLogId(i64);

impl TaskHardDeleteLogId {
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

impl fmt::Display for TaskHardDeleteLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable record of a task's permanent deletion.
///
/// Keeps the raw task identifier rather than a reference: by the time the
/// record is read, the task row is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskHardDeleteLog {
    task: TaskId,
    trashed_at: DateTime<Utc>,
    hard_deleted_at: DateTime<Utc>,
}

impl TaskHardDeleteLog {
    /// Derives a deletion record from the trash item being purged.
    ///
    /// # Errors
    ///
    /// Returns [`AuditDomainError::HardDeleteBeforeTrash`] when
    /// `hard_deleted_at` precedes the item's trashing instant.
    pub fn from_trash_item(
        trash_item: &Persisted<TrashItem>,
        hard_deleted_at: DateTime<Utc>,
    ) -> Result<Self, AuditDomainError> {
        Self::create(trash_item.task(), trash_item.trashed_at(), hard_deleted_at)
    }

    /// Creates a deletion record from raw field values.
    ///
    /// # Errors
    ///
    /// Returns [`AuditDomainError::HardDeleteBeforeTrash`] when
    /// `hard_deleted_at` precedes `trashed_at`.
    pub fn create(
        task: TaskId,
        trashed_at: DateTime<Utc>,
        hard_deleted_at: DateTime<Utc>,
    ) -> Result<Self, AuditDomainError> {
        if hard_deleted_at < trashed_at {
            return Err(AuditDomainError::HardDeleteBeforeTrash);
        }
        Ok(Self {
            task,
            trashed_at,
            hard_deleted_at,
        })
    }

    /// Returns the deleted task's identifier.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Returns the instant the task entered the trash.
    #[must_use]
    pub const fn trashed_at(&self) -> DateTime<Utc> {
        self.trashed_at
    }

    /// Returns the instant the task was permanently deleted.
    #[must_use]
    pub const fn hard_deleted_at(&self) -> DateTime<Utc> {
        self.hard_deleted_at
    }
}

impl Entity for TaskHardDeleteLog {
    type Id = TaskHardDeleteLogId;
}
