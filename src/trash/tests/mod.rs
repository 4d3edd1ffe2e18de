//! Unit tests for the trash domain model.
