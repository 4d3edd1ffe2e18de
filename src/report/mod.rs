//! Daily closing reports.
//!
//! A closing report snapshots a member's completed and incomplete counts for
//! one calendar day in the member's time zone. The counts are fixed at
//! creation; only the generated PDF attachment changes afterwards.

pub mod domain;

#[cfg(test)]
mod tests;
