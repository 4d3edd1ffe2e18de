//! Reminder delivery channels and their address validation rules.

use super::ReminderDomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a constant and compiles unconditionally"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

const KAKAO_MIN_TOKEN_LENGTH: usize = 10;
const SLACK_WEBHOOK_PREFIX: &str = "https://hooks.slack.com/services/";

/// Reminder delivery channel.
///
/// A closed set: each variant dispatches to its own address/token rule, so
/// adding a channel is a localized change rather than a growing switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderChannel {
    /// Email address delivery.
    Email,
    /// KakaoTalk user token delivery.
    Kakao,
    /// Slack incoming-webhook delivery.
    Slack,
    /// Web push endpoint delivery.
    WebPush,
}

impl ReminderChannel {
    /// Normalizes and validates an address or token under this channel's
    /// rule, returning the canonical stored form.
    ///
    /// All channels trim surrounding whitespace; email additionally lowers
    /// the case. The remaining text must satisfy the channel's shape rule.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::BlankAddress`] when nothing remains
    /// after trimming, or the channel-specific error when the shape rule
    /// fails.
    pub fn validate(self, raw: &str) -> Result<String, ReminderDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReminderDomainError::BlankAddress);
        }
        match self {
            Self::Email => validate_email(trimmed),
            Self::Kakao => validate_kakao(trimmed),
            Self::Slack => validate_slack(trimmed),
            Self::WebPush => validate_web_push(trimmed),
        }
    }
}

fn validate_email(value: &str) -> Result<String, ReminderDomainError> {
    let lowered = value.to_lowercase();
    if !EMAIL_PATTERN.is_match(&lowered) {
        return Err(ReminderDomainError::InvalidEmail);
    }
    Ok(lowered)
}

fn validate_kakao(value: &str) -> Result<String, ReminderDomainError> {
    if value.chars().count() < KAKAO_MIN_TOKEN_LENGTH {
        return Err(ReminderDomainError::KakaoTokenTooShort);
    }
    Ok(value.to_owned())
}

fn validate_slack(value: &str) -> Result<String, ReminderDomainError> {
    if !value.starts_with(SLACK_WEBHOOK_PREFIX) {
        return Err(ReminderDomainError::InvalidSlackWebhookUrl);
    }
    Ok(value.to_owned())
}

fn validate_web_push(value: &str) -> Result<String, ReminderDomainError> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ReminderDomainError::InvalidWebPushEndpoint);
    }
    Ok(value.to_owned())
}
