//! Domain model for the task lifecycle.

mod error;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use status::{DueStatus, TaskImportance, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskId};
