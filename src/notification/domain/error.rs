//! Error types for notification scheduling.

use thiserror::Error;

/// Errors returned while mutating notifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationDomainError {
    /// The notification has been sent; rescheduling is no longer legal.
    #[error("already sent")]
    AlreadySent,
}
