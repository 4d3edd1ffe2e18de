//! Hashed verification code value object.

use super::VerificationDomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hash of a verification code.
///
/// The domain compares hashes only; the raw code travels to the member over
/// the delivery channel and never enters this crate. [`CodeHash::sha256_of`]
/// is a convenience for callers that use SHA-256 hex digests; any stable
/// hashed representation is acceptable via [`CodeHash::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeHash(String);

impl CodeHash {
    /// Wraps an already-hashed code.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationDomainError::EmptyCodeHash`] when the value is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, VerificationDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(VerificationDomainError::EmptyCodeHash);
        }
        Ok(Self(raw))
    }

    /// Hashes a raw code with SHA-256 into a lowercase hex digest.
    #[must_use]
    pub fn sha256_of(raw_code: &str) -> Self {
        let digest = Sha256::digest(raw_code.as_bytes());
        Self(digest.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    /// Returns the hash value as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
