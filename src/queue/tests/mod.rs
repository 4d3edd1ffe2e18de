//! Unit tests for the task queue domain model.
