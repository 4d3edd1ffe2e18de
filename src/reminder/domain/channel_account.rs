//! Reminder channel account aggregate root.

use super::{ReminderChannel, ReminderDomainError};
use crate::entity::{Entity, Persisted};
use crate::member::domain::{Member, MemberId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_ENABLED: bool = true;

/// Surrogate identifier for a persisted reminder channel account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderChannelAccountId(i64);

impl ReminderChannelAccountId {
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

impl fmt::Display for ReminderChannelAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reminder channel account aggregate root.
///
/// One per (member, channel) pair, enforced by storage; channel and owner
/// never change after creation. The stored address is the canonical form
/// produced by the channel's validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderChannelAccount {
    channel: ReminderChannel,
    address_or_token: String,
    enabled: bool,
    verified_at: Option<DateTime<Utc>>,
    member: MemberId,
}

/// Parameter object for reconstructing a persisted channel account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedReminderChannelAccountData {
    /// Persisted delivery channel.
    pub channel: ReminderChannel,
    /// Persisted canonical address or token.
    pub address_or_token: String,
    /// Persisted enabled flag.
    pub enabled: bool,
    /// Persisted verification instant, if any.
    pub verified_at: Option<DateTime<Utc>>,
    /// Persisted owning member identifier.
    pub member: MemberId,
}

impl ReminderChannelAccount {
    /// Creates an enabled, unverified account for `channel`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReminderDomainError`] when the address or token fails
    /// the channel's rule.
    pub fn create(
        channel: ReminderChannel,
        address_or_token: &str,
        member: &Persisted<Member>,
    ) -> Result<Self, ReminderDomainError> {
        Ok(Self {
            channel,
            address_or_token: channel.validate(address_or_token)?,
            enabled: DEFAULT_ENABLED,
            verified_at: None,
            member: member.id(),
        })
    }

    /// Creates an email account.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::InvalidEmail`] when the address does
    /// not look like `local@domain.tld`.
    pub fn email(address: &str, member: &Persisted<Member>) -> Result<Self, ReminderDomainError> {
        Self::create(ReminderChannel::Email, address, member)
    }

    /// Creates a Kakao account.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::KakaoTokenTooShort`] when the token is
    /// shorter than ten characters.
    pub fn kakao(token: &str, member: &Persisted<Member>) -> Result<Self, ReminderDomainError> {
        Self::create(ReminderChannel::Kakao, token, member)
    }

    /// Creates a Slack incoming-webhook account.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::InvalidSlackWebhookUrl`] when the URL
    /// is not a Slack incoming-webhook URL.
    pub fn slack(
        webhook_url: &str,
        member: &Persisted<Member>,
    ) -> Result<Self, ReminderDomainError> {
        Self::create(ReminderChannel::Slack, webhook_url, member)
    }

    /// Creates a web push account.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderDomainError::InvalidWebPushEndpoint`] when the
    /// endpoint is not an HTTP(S) URL.
    pub fn web_push(
        endpoint: &str,
        member: &Persisted<Member>,
    ) -> Result<Self, ReminderDomainError> {
        Self::create(ReminderChannel::WebPush, endpoint, member)
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedReminderChannelAccountData) -> Self {
        Self {
            channel: data.channel,
            address_or_token: data.address_or_token,
            enabled: data.enabled,
            verified_at: data.verified_at,
            member: data.member,
        }
    }

    /// Returns the delivery channel.
    #[must_use]
    pub const fn channel(&self) -> ReminderChannel {
        self.channel
    }

    /// Returns the canonical address or token.
    #[must_use]
    pub fn address_or_token(&self) -> &str {
        &self.address_or_token
    }

    /// Returns whether the channel is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the verification instant, if any.
    #[must_use]
    pub const fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.verified_at
    }

    /// Returns the owning member's identifier.
    #[must_use]
    pub const fn member(&self) -> MemberId {
        self.member
    }

    /// Replaces the address or token, re-validating under the channel rule.
    ///
    /// Verification does not survive an address change: on success the
    /// verified instant resets to `None`. On failure the previous address
    /// and verification state are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`ReminderDomainError`] when the new value fails the
    /// channel's rule.
    pub fn update_address_or_token(
        &mut self,
        new_address_or_token: &str,
    ) -> Result<(), ReminderDomainError> {
        let canonical = self.channel.validate(new_address_or_token)?;
        self.address_or_token = canonical;
        self.verified_at = None;
        Ok(())
    }

    /// Enables delivery over this channel.
    pub const fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables delivery over this channel.
    pub const fn disable(&mut self) {
        self.enabled = false;
    }

    /// Records successful external verification at the clock's current
    /// instant.
    pub fn mark_verified(&mut self, clock: &impl Clock) {
        self.verified_at = Some(clock.utc());
    }

    /// Returns whether reminders may be delivered over this account:
    /// enabled and verified.
    #[must_use]
    pub const fn can_send(&self) -> bool {
        self.enabled && self.verified_at.is_some()
    }
}

impl Entity for ReminderChannelAccount {
    type Id = ReminderChannelAccountId;
}
