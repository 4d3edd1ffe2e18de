//! Task aggregate root.

use super::{DueStatus, TaskDomainError, TaskImportance, TaskStatus};
use crate::entity::{Entity, Persisted};
use crate::queue::domain::{TaskQueue, TaskQueueId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
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

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task aggregate root.
///
/// Belongs to one queue, fixed at creation. The title and content are stored
/// verbatim to respect user-entered formatting: a title of `"  Title  "`
/// keeps its whitespace. Only whitespace-only titles are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    title: String,
    content: Option<String>,
    importance: Option<TaskImportance>,
    due_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    trashed_at: Option<DateTime<Utc>>,
    progress: u8,
    status: TaskStatus,
    priority_index: Option<i64>,
    queue: TaskQueueId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted title.
    pub title: String,
    /// Persisted content, if any.
    pub content: Option<String>,
    /// Persisted importance level, if any.
    pub importance: Option<TaskImportance>,
    /// Persisted due time, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted completion time, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted trashing time, if any.
    pub trashed_at: Option<DateTime<Utc>>,
    /// Persisted progress percentage.
    pub progress: u8,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted ordering index within the queue, if any.
    pub priority_index: Option<i64>,
    /// Persisted owning queue identifier.
    pub queue: TaskQueueId,
}

impl Task {
    /// Creates a new active task in `queue`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitle`] when the title is empty or
    /// whitespace-only.
    pub fn create(title: &str, queue: &Persisted<TaskQueue>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validate_title(title)?,
            content: None,
            importance: None,
            due_at: None,
            completed_at: None,
            trashed_at: None,
            progress: 0,
            status: TaskStatus::Active,
            priority_index: None,
            queue: queue.id(),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            title: data.title,
            content: data.content,
            importance: data.importance,
            due_at: data.due_at,
            completed_at: data.completed_at,
            trashed_at: data.trashed_at,
            progress: data.progress,
            status: data.status,
            priority_index: data.priority_index,
            queue: data.queue,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the importance level, if any.
    #[must_use]
    pub const fn importance(&self) -> Option<TaskImportance> {
        self.importance
    }

    /// Returns the due time, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the completion time, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the trashing time, if any.
    #[must_use]
    pub const fn trashed_at(&self) -> Option<DateTime<Utc>> {
        self.trashed_at
    }

    /// Returns the progress percentage.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the ordering index within the queue, if any.
    #[must_use]
    pub const fn priority_index(&self) -> Option<i64> {
        self.priority_index
    }

    /// Returns the owning queue's identifier.
    #[must_use]
    pub const fn queue(&self) -> TaskQueueId {
        self.queue
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitle`] when the new title is blank;
    /// the stored title is left unchanged.
    pub fn edit_title(&mut self, new_title: &str) -> Result<(), TaskDomainError> {
        self.title = validate_title(new_title)?;
        Ok(())
    }

    /// Replaces the content; a blank value normalizes to absent.
    pub fn edit_content(&mut self, new_content: Option<&str>) {
        self.content = match new_content {
            Some(text) if !text.trim().is_empty() => Some(text.to_owned()),
            _ => None,
        };
    }

    /// Sets or clears the due time. Due-status classification is derived
    /// separately via [`Self::check_due_status`].
    pub const fn set_due(&mut self, due_at: Option<DateTime<Utc>>) {
        self.due_at = due_at;
    }

    /// Sets or clears the importance level.
    pub const fn change_importance(&mut self, importance: Option<TaskImportance>) {
        self.importance = importance;
    }

    /// Updates the progress percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidProgress`] when `percent` exceeds
    /// 100.
    pub const fn update_progress(&mut self, percent: u8) -> Result<(), TaskDomainError> {
        if percent > 100 {
            return Err(TaskDomainError::InvalidProgress(percent));
        }
        self.progress = percent;
        Ok(())
    }

    /// Pushes the due time `days` days later, seeding it from the clock's
    /// current instant when no due time is set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroDeferDays`] when `days` is zero.
    pub fn defer_days(&mut self, days: u32, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if days == 0 {
            return Err(TaskDomainError::ZeroDeferDays);
        }
        let base = self.due_at.unwrap_or_else(|| clock.utc());
        self.due_at = Some(base + TimeDelta::days(i64::from(days)));
        Ok(())
    }

    /// Marks the task completed at the clock's current instant.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        self.completed_at = Some(clock.utc());
        self.status = TaskStatus::Completed;
    }

    /// Returns the task to the active state, clearing the completion time.
    ///
    /// Intentionally unguarded: reopening a task that is already active is a
    /// no-op rather than an error.
    pub const fn reopen(&mut self) {
        self.completed_at = None;
        self.status = TaskStatus::Active;
    }

    /// Moves the task to the trash at the clock's current instant.
    ///
    /// Restoring a trashed task is the restore workflow's concern and is not
    /// modelled here.
    pub fn soft_delete(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Trashed;
        self.trashed_at = Some(clock.utc());
    }

    /// Reassigns the ordering index within the owning queue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CrossQueueMove`] when `target_queue` is not
    /// the owning queue; moving tasks across queues is blocked by policy.
    pub fn move_within_queue(
        &mut self,
        target_queue: &Persisted<TaskQueue>,
        new_priority_index: Option<i64>,
    ) -> Result<(), TaskDomainError> {
        if target_queue.id() != self.queue {
            return Err(TaskDomainError::CrossQueueMove {
                from: self.queue,
                to: target_queue.id(),
            });
        }
        self.priority_index = new_priority_index;
        Ok(())
    }

    /// Returns whether the task may be purged manually.
    ///
    /// Eligible when trashed and the clock has reached the trashing instant;
    /// no retention window applies on the manual path.
    #[must_use]
    pub fn can_hard_delete(&self, clock: &impl Clock) -> bool {
        self.status == TaskStatus::Trashed
            && self.trashed_at.is_some_and(|trashed| clock.utc() >= trashed)
    }

    /// Returns whether the task may be purged after a retention window.
    ///
    /// Eligible when trashed and `retention` has elapsed since the trashing
    /// instant. A zero retention means eligible immediately after trashing.
    #[must_use]
    pub fn can_hard_delete_after(&self, clock: &impl Clock, retention: TimeDelta) -> bool {
        self.status == TaskStatus::Trashed
            && self
                .trashed_at
                .is_some_and(|trashed| clock.utc() >= trashed + retention)
    }

    /// Classifies the task against its due time at `now`.
    ///
    /// Pure and stateless. A task due exactly at `now` classifies as
    /// [`DueStatus::Normal`]: overdue requires `now` strictly after the due
    /// time, and the imminent window opens strictly after `now`.
    #[must_use]
    pub fn check_due_status(&self, now: DateTime<Utc>, imminent_hours: u32) -> DueStatus {
        let Some(due_at) = self.due_at else {
            return DueStatus::Normal;
        };
        if now > due_at {
            return DueStatus::Overdue;
        }
        let edge = now + TimeDelta::hours(i64::from(imminent_hours));
        if due_at > now && due_at <= edge {
            DueStatus::Imminent
        } else {
            DueStatus::Normal
        }
    }
}

impl Entity for Task {
    type Id = TaskId;
}

fn validate_title(raw: &str) -> Result<String, TaskDomainError> {
    if raw.trim().is_empty() {
        return Err(TaskDomainError::BlankTitle);
    }
    // stored verbatim, no trimming
    Ok(raw.to_owned())
}
