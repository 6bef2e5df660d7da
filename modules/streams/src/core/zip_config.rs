use crate::core::stream_buffer_config::StreamBufferConfig;

/// Configuration of a [`ZippingOperator`](crate::core::ZippingOperator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZipConfig {
  buffer: StreamBufferConfig,
}

impl ZipConfig {
  /// Creates a configuration whose per-side buffers use `buffer`.
  #[must_use]
  pub const fn new(buffer: StreamBufferConfig) -> Self {
    Self { buffer }
  }

  /// Creates a configuration with per-side buffers of `capacity` elements.
  #[must_use]
  pub const fn with_capacity(capacity: usize) -> Self {
    Self::new(StreamBufferConfig::new(capacity))
  }

  /// Returns the per-side buffer configuration.
  #[must_use]
  pub const fn buffer(&self) -> StreamBufferConfig {
    self.buffer
  }

  /// Returns the per-side buffer capacity. This is also the largest batch requested from either
  /// upstream at a time.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.buffer.capacity()
  }
}
