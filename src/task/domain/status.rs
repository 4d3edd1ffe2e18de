//! Task status, importance, and due-status classification values.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open for work.
    Active,
    /// Task has been marked completed.
    Completed,
    /// Task has been moved to the trash.
    Trashed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Trashed => "trashed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "trashed" => Ok(Self::Trashed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Optional importance level attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskImportance {
    /// Low importance.
    Low,
    /// Medium importance.
    Medium,
    /// High importance.
    High,
}

/// Classification of a task relative to its due time.
///
/// Produced by [`super::Task::check_due_status`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// No due time, due time far enough away, or due exactly now.
    Normal,
    /// Due within the imminent window.
    Imminent,
    /// Due time has passed.
    Overdue,
}
