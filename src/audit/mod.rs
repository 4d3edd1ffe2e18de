//! Immutable audit records derived from task lifecycle events.
//!
//! Records are snapshots: once constructed they expose no mutators, and the
//! storage layer treats them as insert-only.

pub mod domain;

#[cfg(test)]
mod tests;
