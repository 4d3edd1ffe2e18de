//! Unit tests for closing reports.
