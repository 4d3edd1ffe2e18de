//! Domain model for task queues.

mod error;
mod task_queue;

pub use error::QueueDomainError;
pub use task_queue::{PersistedTaskQueueData, TaskQueue, TaskQueueId};
