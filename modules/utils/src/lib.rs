#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(test), no_std)]

//! Shared ownership and synchronization primitives used by the rivulet crates.

extern crate alloc;

pub mod core;
