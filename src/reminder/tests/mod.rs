//! Unit tests for reminder channel accounts and settings.
