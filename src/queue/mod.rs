//! Task queues within a database.
//!
//! A queue carries a capacity limit and an optimistic-concurrency version
//! used by the storage layer when concurrent reorders race.

pub mod domain;

#[cfg(test)]
mod tests;
