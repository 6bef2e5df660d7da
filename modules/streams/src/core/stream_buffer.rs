//! Bounded FIFO buffer for stream elements.

#[cfg(test)]
mod tests;

use alloc::collections::VecDeque;

use crate::core::{stream_buffer_config::StreamBufferConfig, stream_error::StreamError};

/// Buffer for stream elements with a fixed capacity.
pub struct StreamBuffer<T> {
  queue:    VecDeque<T>,
  capacity: usize,
}

impl<T> StreamBuffer<T> {
  /// Creates a new buffer with the configured capacity.
  #[must_use]
  pub fn new(config: StreamBufferConfig) -> Self {
    Self { queue: VecDeque::new(), capacity: config.capacity() }
  }

  /// Attempts to enqueue a value into the buffer.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::BufferFull` when the buffer is full. The rejected value is dropped.
  pub fn offer(&mut self, value: T) -> Result<(), StreamError> {
    if self.queue.len() >= self.capacity {
      return Err(StreamError::BufferFull);
    }
    self.queue.push_back(value);
    Ok(())
  }

  /// Attempts to dequeue the oldest value from the buffer.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::BufferEmpty` when the buffer is empty.
  pub fn poll(&mut self) -> Result<T, StreamError> {
    self.queue.pop_front().ok_or(StreamError::BufferEmpty)
  }

  /// Removes every buffered value.
  pub fn clear(&mut self) {
    self.queue.clear();
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.queue.len()
  }

  /// Returns true when the buffer is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  /// Returns the buffer capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }
}
