//! Unit tests for the database domain model.
