//! Member aggregate root.

use super::{LoginId, MemberDomainError, PasswordHash};
use crate::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identifier for a persisted member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
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

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member account state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Account is in normal use.
    Active,
    /// Account is temporarily suspended.
    Suspended,
    /// Account holder has left the service.
    Withdrawn,
}

/// Member aggregate root.
///
/// The login id is immutable after creation: no mutator for it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    login_id: LoginId,
    password_hash: PasswordHash,
    nickname: String,
    status: MemberStatus,
    time_zone: String,
}

/// Parameter object for reconstructing a persisted member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedMemberData {
    /// Persisted login identifier.
    pub login_id: LoginId,
    /// Persisted password hash.
    pub password_hash: PasswordHash,
    /// Persisted nickname.
    pub nickname: String,
    /// Persisted account state.
    pub status: MemberStatus,
    /// Persisted IANA time-zone identifier.
    pub time_zone: String,
}

impl Member {
    /// Creates a new active member.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberDomainError`] when the login id, password hash,
    /// nickname, or time-zone identifier violates its rule.
    pub fn create(
        login_id: &str,
        password_hash: &str,
        nickname: &str,
        time_zone: &str,
    ) -> Result<Self, MemberDomainError> {
        Ok(Self {
            login_id: LoginId::new(login_id)?,
            password_hash: PasswordHash::new(password_hash)?,
            nickname: validate_nickname(nickname)?,
            status: MemberStatus::Active,
            time_zone: validate_time_zone(time_zone)?,
        })
    }

    /// Reconstructs a member from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedMemberData) -> Self {
        Self {
            login_id: data.login_id,
            password_hash: data.password_hash,
            nickname: data.nickname,
            status: data.status,
            time_zone: data.time_zone,
        }
    }

    /// Returns the login identifier.
    #[must_use]
    pub const fn login_id(&self) -> &LoginId {
        &self.login_id
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the nickname.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Returns the account state.
    #[must_use]
    pub const fn status(&self) -> MemberStatus {
        self.status
    }

    /// Returns the IANA time-zone identifier.
    #[must_use]
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Replaces the password hash.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberDomainError`] when the new hash violates the
    /// password hash rules; the stored hash is left unchanged.
    pub fn change_password(&mut self, new_password_hash: &str) -> Result<(), MemberDomainError> {
        self.password_hash = PasswordHash::new(new_password_hash)?;
        Ok(())
    }

    /// Replaces the nickname.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberDomainError`] when the new nickname violates the
    /// nickname rules; the stored nickname is left unchanged.
    pub fn change_nickname(&mut self, new_nickname: &str) -> Result<(), MemberDomainError> {
        self.nickname = validate_nickname(new_nickname)?;
        Ok(())
    }

    /// Changes the account state.
    pub const fn change_status(&mut self, status: MemberStatus) {
        self.status = status;
    }
}

impl Entity for Member {
    type Id = MemberId;
}

fn validate_nickname(nickname: &str) -> Result<String, MemberDomainError> {
    if nickname.trim().is_empty() {
        return Err(MemberDomainError::BlankNickname);
    }
    let length = nickname.chars().count();
    if length > 50 {
        return Err(MemberDomainError::NicknameTooLong(length));
    }
    if nickname.starts_with(char::is_whitespace) || nickname.ends_with(char::is_whitespace) {
        return Err(MemberDomainError::NicknameEdgeWhitespace);
    }
    Ok(nickname.to_owned())
}

fn validate_time_zone(time_zone: &str) -> Result<String, MemberDomainError> {
    if time_zone.trim().is_empty() {
        return Err(MemberDomainError::BlankTimeZone);
    }
    Ok(time_zone.to_owned())
}
