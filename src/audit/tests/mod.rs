//! Unit tests for audit record construction.
