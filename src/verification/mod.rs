//! Single-use verification challenge flow.
//!
//! A verification is issued with a hashed code and a positive lifetime,
//! consumed at most once, and considered expired from the exact expiry
//! instant onward.

pub mod domain;

#[cfg(test)]
mod tests;
