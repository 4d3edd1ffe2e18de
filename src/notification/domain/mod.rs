//! Domain model for notification scheduling.

mod error;
mod notification;

pub use error::NotificationDomainError;
pub use notification::{
    Notification, NotificationChannel, NotificationId, NotificationType, PersistedNotificationData,
};
