#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(test), no_std)]

//! Demand-driven push streams and pull-based spliterators.
//!
//! The [`core`] module is `no_std` + `alloc`: the [`core::Operator`] / [`core::Subscription`]
//! protocol, the two-source [`core::ZippingOperator`], and the spliterator family
//! ([`core::FlatMapSpliterator`], [`core::ReversingRangeSpliterator`], ...). The [`std`] module
//! bridges operators into blocking iterators.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;
