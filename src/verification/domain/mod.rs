//! Domain model for verification challenges.

mod code_hash;
mod error;
mod verification;

pub use code_hash::CodeHash;
pub use error::VerificationDomainError;
pub use verification::{
    PersistedVerificationData, Verification, VerificationChannel, VerificationId,
};
