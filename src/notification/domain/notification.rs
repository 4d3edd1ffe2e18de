//! Notification aggregate root.

use super::NotificationDomainError;
use crate::entity::{Entity, Persisted};
use crate::member::domain::{Member, MemberId};
use crate::task::domain::{Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
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

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason a notification exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Day-before reminder (D-1).
    BeforeDay,
    /// Due time falls inside the imminent window.
    Imminent,
    /// Due time has arrived.
    Due,
    /// Due time has passed.
    Overdue,
    /// Daily closing report.
    Report,
}

/// Channel a notification is delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    /// Email delivery.
    Email,
    /// KakaoTalk delivery.
    Kakao,
    /// Slack delivery.
    Slack,
    /// Web push delivery.
    WebPush,
}

/// Notification aggregate root.
///
/// Targets one member and optionally references the task that triggered it
/// (report notifications carry no task). Unsent while `sent_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    kind: NotificationType,
    channel: NotificationChannel,
    scheduled_at: DateTime<Utc>,
    sent_at: Option<DateTime<Utc>>,
    member: MemberId,
    task: Option<TaskId>,
}

/// Parameter object for reconstructing a persisted notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedNotificationData {
    /// Persisted notification type.
    pub kind: NotificationType,
    /// Persisted delivery channel.
    pub channel: NotificationChannel,
    /// Persisted scheduled instant.
    pub scheduled_at: DateTime<Utc>,
    /// Persisted sent instant, if any.
    pub sent_at: Option<DateTime<Utc>>,
    /// Persisted target member identifier.
    pub member: MemberId,
    /// Persisted related task identifier, if any.
    pub task: Option<TaskId>,
}

impl Notification {
    /// Schedules a notification without a related task.
    #[must_use]
    pub const fn schedule(
        kind: NotificationType,
        channel: NotificationChannel,
        scheduled_at: DateTime<Utc>,
        member: &Persisted<Member>,
    ) -> Self {
        Self {
            kind,
            channel,
            scheduled_at,
            sent_at: None,
            member: member.id(),
            task: None,
        }
    }

    /// Schedules a notification referencing the task that triggered it.
    #[must_use]
    pub const fn schedule_for_task(
        kind: NotificationType,
        channel: NotificationChannel,
        scheduled_at: DateTime<Utc>,
        member: &Persisted<Member>,
        task: &Persisted<Task>,
    ) -> Self {
        Self {
            kind,
            channel,
            scheduled_at,
            sent_at: None,
            member: member.id(),
            task: Some(task.id()),
        }
    }

    /// Reconstructs a notification from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedNotificationData) -> Self {
        Self {
            kind: data.kind,
            channel: data.channel,
            scheduled_at: data.scheduled_at,
            sent_at: data.sent_at,
            member: data.member,
            task: data.task,
        }
    }

    /// Returns the notification type.
    #[must_use]
    pub const fn kind(&self) -> NotificationType {
        self.kind
    }

    /// Returns the delivery channel.
    #[must_use]
    pub const fn channel(&self) -> NotificationChannel {
        self.channel
    }

    /// Returns the scheduled instant.
    #[must_use]
    pub const fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    /// Returns the sent instant, if any.
    #[must_use]
    pub const fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    /// Returns the target member's identifier.
    #[must_use]
    pub const fn member(&self) -> MemberId {
        self.member
    }

    /// Returns the related task's identifier, if any.
    #[must_use]
    pub const fn task(&self) -> Option<TaskId> {
        self.task
    }

    /// Returns whether the notification may be sent at `now`.
    ///
    /// True when unsent and the scheduled instant has been reached; the
    /// boundary is inclusive.
    #[must_use]
    pub fn can_send(&self, now: DateTime<Utc>) -> bool {
        self.sent_at.is_none() && now >= self.scheduled_at
    }

    /// Records the send at the clock's current instant.
    ///
    /// Unconditional: [`Self::can_send`] is an advisory gate for the caller,
    /// not a precondition enforced here.
    pub fn mark_sent(&mut self, clock: &impl Clock) {
        self.sent_at = Some(clock.utc());
    }

    /// Moves the scheduled instant.
    ///
    /// Rescheduling into the past is allowed; the send gate simply opens
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::AlreadySent`] when the
    /// notification has been sent.
    pub const fn reschedule(
        &mut self,
        new_time: DateTime<Utc>,
    ) -> Result<(), NotificationDomainError> {
        if self.sent_at.is_some() {
            return Err(NotificationDomainError::AlreadySent);
        }
        self.scheduled_at = new_time;
        Ok(())
    }
}

impl Entity for Notification {
    type Id = NotificationId;
}
