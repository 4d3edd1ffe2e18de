//! Verification aggregate root.

use super::{CodeHash, VerificationDomainError};
use crate::entity::{Entity, Persisted, Version};
use crate::member::domain::{Member, MemberId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationId(i64);

impl VerificationId {
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

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel a verification code was delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationChannel {
    /// Email delivery.
    Email,
    /// KakaoTalk delivery.
    Kakao,
    /// Slack delivery.
    Slack,
    /// Web push delivery.
    WebPush,
}

/// Verification aggregate root.
///
/// Unverified while `verified_at` is `None`; once set, the record is
/// terminal and rejects further verification attempts. A member may hold
/// several verifications across channels at once; concurrent consumption of
/// the same record is guarded by the optimistic version at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    channel: VerificationChannel,
    code_hash: CodeHash,
    expires_at: DateTime<Utc>,
    verified_at: Option<DateTime<Utc>>,
    version: Version,
    member: MemberId,
}

/// Parameter object for reconstructing a persisted verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedVerificationData {
    /// Persisted delivery channel.
    pub channel: VerificationChannel,
    /// Persisted code hash.
    pub code_hash: CodeHash,
    /// Persisted expiry instant.
    pub expires_at: DateTime<Utc>,
    /// Persisted verification instant, if any.
    pub verified_at: Option<DateTime<Utc>>,
    /// Persisted optimistic-lock version.
    pub version: Version,
    /// Persisted owning member identifier.
    pub member: MemberId,
}

impl Verification {
    /// Issues a verification expiring `duration` after the clock's current
    /// instant.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationDomainError::NonPositiveDuration`] when
    /// `duration` is zero or negative.
    pub fn issue(
        channel: VerificationChannel,
        code_hash: CodeHash,
        duration: TimeDelta,
        clock: &impl Clock,
        member: &Persisted<Member>,
    ) -> Result<Self, VerificationDomainError> {
        if duration <= TimeDelta::zero() {
            return Err(VerificationDomainError::NonPositiveDuration);
        }
        Ok(Self {
            channel,
            code_hash,
            expires_at: clock.utc() + duration,
            verified_at: None,
            version: Version::initial(),
            member: member.id(),
        })
    }

    /// Reconstructs a verification from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedVerificationData) -> Self {
        Self {
            channel: data.channel,
            code_hash: data.code_hash,
            expires_at: data.expires_at,
            verified_at: data.verified_at,
            version: data.version,
            member: data.member,
        }
    }

    /// Returns the delivery channel.
    #[must_use]
    pub const fn channel(&self) -> VerificationChannel {
        self.channel
    }

    /// Returns the expiry instant.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the verification instant, if any.
    #[must_use]
    pub const fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.verified_at
    }

    /// Returns the optimistic-lock version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the owning member's identifier.
    #[must_use]
    pub const fn member(&self) -> MemberId {
        self.member
    }

    /// Returns whether the verification has been consumed.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }

    /// Returns whether the clock has reached the expiry instant.
    ///
    /// The comparison is inclusive: the exact expiry instant counts as
    /// expired. Independent of whether the record was verified.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        clock.utc() >= self.expires_at
    }

    /// Consumes the verification with the supplied code hash.
    ///
    /// On success, records the clock's current instant as the verification
    /// time; the record is terminal afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationDomainError::AlreadyVerified`] when the record
    /// was consumed before, [`VerificationDomainError::Expired`] when the
    /// clock has reached the expiry instant (even with the correct code),
    /// or [`VerificationDomainError::CodeMismatch`] when the hashes differ.
    pub fn verify(
        &mut self,
        code_hash: &CodeHash,
        clock: &impl Clock,
    ) -> Result<(), VerificationDomainError> {
        if self.is_verified() {
            return Err(VerificationDomainError::AlreadyVerified);
        }
        let now = clock.utc();
        if now >= self.expires_at {
            return Err(VerificationDomainError::Expired);
        }
        if &self.code_hash != code_hash {
            return Err(VerificationDomainError::CodeMismatch);
        }
        self.verified_at = Some(now);
        Ok(())
    }
}

impl Entity for Verification {
    type Id = VerificationId;
}
