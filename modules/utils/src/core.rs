//! `no_std` building blocks shared by the rivulet crates.

/// Synchronization primitives and shared ownership abstractions.
pub mod sync;
