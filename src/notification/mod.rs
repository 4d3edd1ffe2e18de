//! Notification scheduling policy.
//!
//! The core decides *whether* a notification may be sent at an instant; the
//! actual delivery and the trigger that re-evaluates pending notifications
//! live outside the crate.

pub mod domain;

#[cfg(test)]
mod tests;
