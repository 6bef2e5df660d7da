//! Stream error definitions.

#[cfg(test)]
mod tests;

use alloc::string::String;

/// Errors signalled through [`Subscriber::on_error`](crate::core::Subscriber::on_error) or
/// returned by fallible stream functions.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// Demand request is not positive.
  #[error("request count must be positive")]
  InvalidDemand,
  /// Buffer reached capacity.
  #[error("buffer is full")]
  BufferFull,
  /// Buffer is empty.
  #[error("buffer is empty")]
  BufferEmpty,
  /// The subscription has been cancelled.
  #[error("subscription is cancelled")]
  Cancelled,
  /// A combining, mapping or upstream function failed.
  #[error("stream element failed: {reason}")]
  Failed {
    /// Human-readable failure description.
    reason: String,
  },
}

impl StreamError {
  /// Creates a [`StreamError::Failed`] with the given reason.
  #[must_use]
  pub fn failed(reason: impl Into<String>) -> Self {
    Self::Failed { reason: reason.into() }
  }
}
