//! Reminder delivery channels and thresholds.
//!
//! Each delivery channel owns its address/token validation rule; accounts
//! lose their verified status whenever the address changes. The setting
//! entity provides the thresholds the due-status classifier and overdue
//! re-notification logic consume.

pub mod domain;

#[cfg(test)]
mod tests;
