//! Member identity for the task-tracking service.
//!
//! A member owns databases, reminder settings, channel accounts, and closing
//! reports. The login id and password hash are value objects that enforce
//! their own invariants; the entity composes them.

pub mod domain;

#[cfg(test)]
mod tests;
