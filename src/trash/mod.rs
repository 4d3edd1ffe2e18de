//! Trash retention windows.
//!
//! A trash item pins the instant a task entered the trash and the instant
//! its retention window closes. Hard deletion becomes possible only at or
//! after the window's end, and the window can only ever be extended.

pub mod domain;

#[cfg(test)]
mod tests;
