//! Task databases owned by a single member.
//!
//! Mutating operations carry an ownership guard: the acting member must be
//! the owner, and a violation is reported as a distinct permission error
//! rather than a validation failure.

pub mod domain;

#[cfg(test)]
mod tests;
