//! Error types for member identity validation.

use thiserror::Error;

/// Errors returned while constructing or mutating member identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemberDomainError {
    /// The login id is empty.
    #[error("login id must not be empty")]
    EmptyLoginId,

    /// The login id contains whitespace.
    #[error("login id must not contain whitespace")]
    LoginIdWhitespace,

    /// The login id length is outside the permitted range.
    #[error("login id length must be between 5 and 20, got {0}")]
    LoginIdLength(usize),

    /// The login id contains a character outside `[a-z0-9]`.
    #[error("login id must contain only lowercase letters and digits")]
    LoginIdCharset,

    /// The password hash is empty.
    #[error("password hash must not be empty")]
    EmptyPasswordHash,

    /// The password hash contains whitespace.
    #[error("password hash must not contain whitespace")]
    PasswordHashWhitespace,

    /// The password hash exceeds the storage length limit.
    #[error("password hash length must be <= 255, got {0}")]
    PasswordHashTooLong(usize),

    /// The nickname is empty or whitespace-only.
    #[error("nickname must not be blank")]
    BlankNickname,

    /// The nickname exceeds the permitted length.
    #[error("nickname length must be <= 50, got {0}")]
    NicknameTooLong(usize),

    /// The nickname starts or ends with whitespace.
    #[error("nickname must not start or end with whitespace")]
    NicknameEdgeWhitespace,

    /// The time-zone identifier is empty or whitespace-only.
    #[error("time zone must not be blank")]
    BlankTimeZone,
}
