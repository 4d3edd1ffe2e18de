//! Unit tests for notification scheduling.
