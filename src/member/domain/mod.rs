//! Domain model for member identity.

mod error;
mod login_id;
mod member;
mod password_hash;

pub use error::MemberDomainError;
pub use login_id::LoginId;
pub use member::{Member, MemberId, MemberStatus, PersistedMemberData};
pub use password_hash::PasswordHash;
