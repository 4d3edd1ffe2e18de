//! Unit tests for the task domain model.

mod due_status_tests;
mod lifecycle_tests;
mod status_tests;
