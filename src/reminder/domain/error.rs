//! Error types for reminder channel accounts and settings.

use thiserror::Error;

/// Errors returned while validating reminder channel data and thresholds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReminderDomainError {
    /// The address or token is empty after trimming.
    #[error("address or token must not be blank")]
    BlankAddress,

    /// The email address does not match the `local@domain.tld` pattern.
    #[error("invalid email")]
    InvalidEmail,

    /// The Kakao token is shorter than the minimum length.
    #[error("kakao token too short")]
    KakaoTokenTooShort,

    /// The Slack URL is not an incoming-webhook URL.
    #[error("invalid slack webhook url")]
    InvalidSlackWebhookUrl,

    /// The web push endpoint is not an HTTP(S) URL.
    #[error("invalid web push endpoint")]
    InvalidWebPushEndpoint,

    /// The imminent-hours threshold is outside `0..=168`.
    #[error("imminent hours must be between 0 and 168, got {0}")]
    ImminentHoursOutOfRange(u32),
}
