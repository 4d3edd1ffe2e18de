//! Quenda: temporal and lifecycle policy core of a personal task-tracking
//! service.
//!
//! The crate owns the decision logic that is hard to get right: task status
//! transitions and due-status classification, trash retention and hard-delete
//! eligibility, verification code issuance/expiry/single-use consumption,
//! notification scheduling, and per-channel reminder-account validation.
//! Everything else (storage, transport, delivery, scheduling triggers) lives
//! outside the crate and talks to it through plain values.
//!
//! # Architecture
//!
//! - **Domain values**: entities are constructed as unpersisted drafts; the
//!   storage collaborator assigns identifiers and wraps values as
//!   [`entity::Persisted`]. Relationship-building operations require the
//!   persisted form, so transient references are unrepresentable.
//! - **Injected clock**: every time-sensitive operation takes either an
//!   explicit `now` instant or a [`mockable::Clock`], never ambient time,
//!   keeping every decision deterministic.
//! - **Errors**: each bounded context exposes one `thiserror` enum whose
//!   variants separate validation, lifecycle-state, and ownership failures.
//!
//! # Modules
//!
//! - [`member`]: account identity, login id and password hash values
//! - [`database`]: owned task databases with soft deletion
//! - [`queue`]: task queues with capacity and reorder versioning
//! - [`task`]: task lifecycle and the due-status classifier
//! - [`trash`]: trash retention windows and hard-delete eligibility
//! - [`audit`]: immutable completion and hard-delete records
//! - [`verification`]: single-use verification challenge flow
//! - [`notification`]: notification scheduling policy
//! - [`reminder`]: reminder channel accounts and threshold settings
//! - [`report`]: daily closing reports

pub mod audit;
pub mod database;
pub mod entity;
pub mod member;
pub mod notification;
pub mod queue;
pub mod reminder;
pub mod report;
pub mod task;
pub mod trash;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;
