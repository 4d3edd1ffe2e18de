//! Domain model for audit snapshots.

mod completion_log;
mod error;
mod hard_delete_log;

pub use completion_log::{CompletionLog, CompletionLogId};
pub use error::AuditDomainError;
pub use hard_delete_log::{TaskHardDeleteLog, TaskHardDeleteLogId};
