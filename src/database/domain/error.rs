//! Error types for database validation and ownership.

use crate::member::domain::MemberId;
use thiserror::Error;

/// Errors returned while constructing or mutating a database.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatabaseDomainError {
    /// The name is empty or whitespace-only.
    #[error("database name must not be blank")]
    BlankName,

    /// The name exceeds the permitted length.
    #[error("database name length must be <= 100, got {0}")]
    NameTooLong(usize),

    /// The description exceeds the permitted length.
    #[error("database description length must be <= 500, got {0}")]
    DescriptionTooLong(usize),

    /// The acting member does not own this database. Reported as a
    /// permission failure, distinct from input validation.
    #[error("member {actor} is not the owner of this database")]
    NotOwner {
        /// Identifier of the member that attempted the operation.
        actor: MemberId,
    },
}
