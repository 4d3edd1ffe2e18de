//! Task lifecycle and due-status classification.
//!
//! The module owns the status transitions (active, completed, trashed), the
//! pure due-status classifier with its exact boundary semantics, and the two
//! hard-delete eligibility checks that mirror manual and retention-driven
//! purging.

pub mod domain;

#[cfg(test)]
mod tests;
