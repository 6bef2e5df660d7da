//! Blocking bridges for std environments.

mod channel_subscriber;
mod operator_iter;
mod operator_signal;

pub use operator_iter::OperatorIter;
