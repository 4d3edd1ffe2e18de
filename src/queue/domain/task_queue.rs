//! Task queue aggregate root.

use super::QueueDomainError;
use crate::database::domain::{Database, DatabaseId};
use crate::entity::{Entity, Persisted, Version};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 500;
const DEFAULT_MAX_TASKS: u32 = 50;

/// Surrogate identifier for a persisted task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskQueueId(i64);

impl TaskQueueId {
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

impl fmt::Display for TaskQueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task queue aggregate root.
///
/// Belongs to one database, fixed at creation. Queue names are unique per
/// database (enforced by storage) and preserved verbatim. The version field
/// guards concurrent reordering via optimistic locking at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQueue {
    name: String,
    description: Option<String>,
    max_tasks: u32,
    version: Version,
    database: DatabaseId,
}

/// Parameter object for reconstructing a persisted task queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskQueueData {
    /// Persisted name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted capacity limit.
    pub max_tasks: u32,
    /// Persisted optimistic-lock version.
    pub version: Version,
    /// Persisted owning database identifier.
    pub database: DatabaseId,
}

impl TaskQueue {
    /// Creates a queue with the default capacity of 50 tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`QueueDomainError`] when the name is blank or too long, or
    /// the description is too long.
    pub fn create(
        name: &str,
        description: Option<&str>,
        database: &Persisted<Database>,
    ) -> Result<Self, QueueDomainError> {
        Self::new(name, description, DEFAULT_MAX_TASKS, database)
    }

    /// Creates a queue with an explicit capacity limit.
    ///
    /// # Errors
    ///
    /// Returns [`QueueDomainError::ZeroMaxTasks`] when `max_tasks` is zero,
    /// or a validation error for the name or description.
    pub fn create_with_limit(
        name: &str,
        description: Option<&str>,
        max_tasks: u32,
        database: &Persisted<Database>,
    ) -> Result<Self, QueueDomainError> {
        if max_tasks == 0 {
            return Err(QueueDomainError::ZeroMaxTasks);
        }
        Self::new(name, description, max_tasks, database)
    }

    fn new(
        name: &str,
        description: Option<&str>,
        max_tasks: u32,
        database: &Persisted<Database>,
    ) -> Result<Self, QueueDomainError> {
        Ok(Self {
            name: validate_name(name)?,
            description: normalize_description(description)?,
            max_tasks,
            version: Version::initial(),
            database: database.id(),
        })
    }

    /// Reconstructs a queue from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskQueueData) -> Self {
        Self {
            name: data.name,
            description: data.description,
            max_tasks: data.max_tasks,
            version: data.version,
            database: data.database,
        }
    }

    /// Returns the queue name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the capacity limit.
    #[must_use]
    pub const fn max_tasks(&self) -> u32 {
        self.max_tasks
    }

    /// Returns the optimistic-lock version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the owning database's identifier.
    #[must_use]
    pub const fn database(&self) -> DatabaseId {
        self.database
    }

    /// Returns whether one more task fits given the current task count.
    #[must_use]
    pub const fn has_capacity(&self, current_task_count: u32) -> bool {
        current_task_count < self.max_tasks
    }
}

impl Entity for TaskQueue {
    type Id = TaskQueueId;
}

fn validate_name(raw: &str) -> Result<String, QueueDomainError> {
    if raw.trim().is_empty() {
        return Err(QueueDomainError::BlankName);
    }
    let length = raw.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(QueueDomainError::NameTooLong(length));
    }
    Ok(raw.to_owned())
}

fn normalize_description(raw: Option<&str>) -> Result<Option<String>, QueueDomainError> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => {
            let length = text.chars().count();
            if length > MAX_DESCRIPTION_LENGTH {
                return Err(QueueDomainError::DescriptionTooLong(length));
            }
            Ok(Some(text.to_owned()))
        }
    }
}
