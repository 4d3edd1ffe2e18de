//! Error types for the verification challenge flow.

use thiserror::Error;

/// Errors returned while issuing or consuming verifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationDomainError {
    /// The code hash is empty or whitespace-only.
    #[error("code hash must not be blank")]
    EmptyCodeHash,

    /// The requested lifetime is zero or negative.
    #[error("duration must be positive")]
    NonPositiveDuration,

    /// The verification has already been consumed; the record is terminal.
    #[error("already verified")]
    AlreadyVerified,

    /// The clock has reached or passed the expiry instant.
    #[error("verification code expired")]
    Expired,

    /// The supplied hash does not match the stored hash.
    #[error("code mismatch")]
    CodeMismatch,
}
