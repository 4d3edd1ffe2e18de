//! Trash item aggregate root.

use super::TrashDomainError;
use crate::entity::{Entity, Persisted};
use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted trash item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrashItemId(i64);

impl TrashItemId {
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

impl fmt::Display for TrashItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trash item aggregate root.
///
/// One-to-one with a task that is already trashed (uniqueness enforced by
/// storage). Holds the retention window; the actual task restore and row
/// deletion happen in the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashItem {
    trashed_at: DateTime<Utc>,
    retention_until: DateTime<Utc>,
    task: TaskId,
}

/// Parameter object for reconstructing a persisted trash item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTrashItemData {
    /// Persisted trashing instant.
    pub trashed_at: DateTime<Utc>,
    /// Persisted retention window end.
    pub retention_until: DateTime<Utc>,
    /// Persisted trashed task identifier.
    pub task: TaskId,
}

impl TrashItem {
    /// Creates a trash item with an explicit retention end.
    ///
    /// # Errors
    ///
    /// Returns [`TrashDomainError::RetentionBeforeTrashed`] when
    /// `retention_until` precedes `trashed_at`, or
    /// [`TrashDomainError::TaskNotTrashed`] when the task is not trashed.
    pub fn create(
        trashed_at: DateTime<Utc>,
        retention_until: DateTime<Utc>,
        task: &Persisted<Task>,
    ) -> Result<Self, TrashDomainError> {
        if retention_until < trashed_at {
            return Err(TrashDomainError::RetentionBeforeTrashed);
        }
        if task.status() != TaskStatus::Trashed {
            return Err(TrashDomainError::TaskNotTrashed {
                status: task.status(),
            });
        }
        Ok(Self {
            trashed_at,
            retention_until,
            task: task.id(),
        })
    }

    /// Creates a trash item whose window ends `retention` after
    /// `trashed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TrashDomainError::NonPositiveRetention`] when `retention`
    /// is zero or negative, or [`TrashDomainError::TaskNotTrashed`] when the
    /// task is not trashed.
    pub fn create_with_retention(
        trashed_at: DateTime<Utc>,
        retention: TimeDelta,
        task: &Persisted<Task>,
    ) -> Result<Self, TrashDomainError> {
        if retention <= TimeDelta::zero() {
            return Err(TrashDomainError::NonPositiveRetention);
        }
        Self::create(trashed_at, trashed_at + retention, task)
    }

    /// Reconstructs a trash item from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedTrashItemData) -> Self {
        Self {
            trashed_at: data.trashed_at,
            retention_until: data.retention_until,
            task: data.task,
        }
    }

    /// Returns the trashing instant.
    #[must_use]
    pub const fn trashed_at(&self) -> DateTime<Utc> {
        self.trashed_at
    }

    /// Returns the retention window end.
    #[must_use]
    pub const fn retention_until(&self) -> DateTime<Utc> {
        self.retention_until
    }

    /// Returns the trashed task's identifier.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Returns whether the item may be hard-deleted at `now`.
    ///
    /// The boundary is inclusive: the exact retention end is eligible.
    #[must_use]
    pub fn can_hard_delete(&self, now: DateTime<Utc>) -> bool {
        now >= self.retention_until
    }

    /// Extends the retention window.
    ///
    /// A ratchet: the end moves only when the new value is strictly later
    /// than the current one; an earlier value is a silent no-op, so the
    /// window never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`TrashDomainError::RetentionBeforeTrashed`] when the new
    /// value precedes the trashing instant.
    pub fn extend_retention_until(
        &mut self,
        new_retention_until: DateTime<Utc>,
    ) -> Result<(), TrashDomainError> {
        if new_retention_until < self.trashed_at {
            return Err(TrashDomainError::RetentionBeforeTrashed);
        }
        if new_retention_until > self.retention_until {
            self.retention_until = new_retention_until;
        }
        Ok(())
    }
}

impl Entity for TrashItem {
    type Id = TrashItemId;
}
