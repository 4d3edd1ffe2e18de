//! Unit tests for the verification challenge flow.

mod code_hash_tests;
