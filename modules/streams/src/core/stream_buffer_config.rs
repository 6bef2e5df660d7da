/// Configuration for bounded stream buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamBufferConfig {
  capacity: usize,
}

impl StreamBufferConfig {
  /// Capacity used when nothing else is configured.
  pub const DEFAULT_CAPACITY: usize = 1024;

  /// Creates a new configuration with the provided capacity.
  ///
  /// A capacity of zero is raised to one so a buffer can always hold a waiting element.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity: if capacity == 0 { 1 } else { capacity } }
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Updates the capacity.
  #[must_use]
  pub const fn with_capacity(self, capacity: usize) -> Self {
    Self::new(capacity)
  }
}

impl Default for StreamBufferConfig {
  fn default() -> Self {
    Self::new(Self::DEFAULT_CAPACITY)
  }
}
