//! Unit tests for the member domain model.

mod member_tests;
