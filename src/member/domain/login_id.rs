//! Login identifier value object.

use super::MemberDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated member login identifier.
///
/// Permits only lowercase ASCII letters and digits, 5 to 20 characters.
/// The input is never normalized: values with whitespace or uppercase
/// characters are rejected rather than trimmed or lowered. Immutable after
/// account creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginId(String);

impl LoginId {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 20;

    /// Creates a validated login identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`MemberDomainError`] when the value is empty, contains
    /// whitespace, falls outside the 5..=20 length range, or contains a
    /// character other than a lowercase ASCII letter or digit.
    pub fn new(value: impl Into<String>) -> Result<Self, MemberDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(MemberDomainError::EmptyLoginId);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(MemberDomainError::LoginIdWhitespace);
        }
        if raw.len() < Self::MIN_LENGTH || raw.len() > Self::MAX_LENGTH {
            return Err(MemberDomainError::LoginIdLength(raw.len()));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(MemberDomainError::LoginIdCharset);
        }
        Ok(Self(raw))
    }

    /// Returns the login identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LoginId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
