//! Password hash value object.

use super::MemberDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Already-hashed password string.
///
/// The value object only encapsulates a hash produced elsewhere; validating
/// and hashing the raw password is the service layer's responsibility. The
/// `Debug` representation is masked so hashes never reach logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    const MAX_LENGTH: usize = 255;

    /// Creates a validated password hash wrapper.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberDomainError`] when the value is empty, longer than
    /// 255 bytes, or contains any whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, MemberDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(MemberDomainError::EmptyPasswordHash);
        }
        if raw.len() > Self::MAX_LENGTH {
            return Err(MemberDomainError::PasswordHashTooLong(raw.len()));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(MemberDomainError::PasswordHashWhitespace);
        }
        Ok(Self(raw))
    }

    /// Returns the hash value as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(****)")
    }
}
