//! Domain model for reminder channels and settings.

mod channel;
mod channel_account;
mod error;
mod setting;

pub use channel::ReminderChannel;
pub use channel_account::{
    PersistedReminderChannelAccountData, ReminderChannelAccount, ReminderChannelAccountId,
};
pub use error::ReminderDomainError;
pub use setting::{PersistedReminderSettingData, ReminderSetting};
