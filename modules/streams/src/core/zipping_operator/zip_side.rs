use portable_atomic::{AtomicBool, AtomicU64, Ordering};
use rivulet_utils_rs::core::sync::SpinSyncMutex;

use crate::core::{
  demand::Demand,
  stream_buffer::StreamBuffer,
  stream_buffer_config::StreamBufferConfig,
  stream_error::StreamError,
  subscription::SubscriptionShared,
};

/// Buffer, completion flag and upstream demand of one zipped input.
pub(super) struct ZipSide<T> {
  buffer:   SpinSyncMutex<StreamBuffer<T>>,
  complete: AtomicBool,
  pending:  AtomicU64,
  upstream: SpinSyncMutex<Option<SubscriptionShared>>,
}

impl<T> ZipSide<T> {
  pub(super) fn new(config: StreamBufferConfig) -> Self {
    Self {
      buffer:   SpinSyncMutex::new(StreamBuffer::new(config)),
      complete: AtomicBool::new(false),
      pending:  AtomicU64::new(0),
      upstream: SpinSyncMutex::new(None),
    }
  }

  pub(super) fn poll(&self) -> Option<T> {
    self.buffer.lock().poll().ok()
  }

  pub(super) fn offer(&self, value: T) -> Result<(), StreamError> {
    self.buffer.lock().offer(value)
  }

  pub(super) fn is_empty(&self) -> bool {
    self.buffer.lock().is_empty()
  }

  pub(super) fn clear(&self) {
    self.buffer.lock().clear();
  }

  pub(super) fn mark_complete(&self) {
    self.complete.store(true, Ordering::Release);
  }

  pub(super) fn is_complete(&self) -> bool {
    self.complete.load(Ordering::Acquire)
  }

  /// Accounts for one element delivered against requested demand.
  pub(super) fn arrived(&self) {
    let _ = self.pending.fetch_update(Ordering::AcqRel, Ordering::Acquire, |pending| pending.checked_sub(1));
  }

  /// Requested-but-undelivered elements plus buffered elements.
  pub(super) fn outstanding(&self) -> u64 {
    self.pending.load(Ordering::Acquire).saturating_add(self.buffer.lock().len() as u64)
  }

  pub(super) fn attach(&self, upstream: SubscriptionShared) {
    *self.upstream.lock() = Some(upstream);
  }

  /// Asks upstream for `count` more elements.
  pub(super) fn request(&self, count: u64) {
    let upstream = self.upstream.lock().clone();
    if let Some(upstream) = upstream {
      self.pending.fetch_add(count, Ordering::AcqRel);
      upstream.request(Demand::Finite(count));
    }
  }

  /// Detaches and cancels the upstream subscription. Returns `false` if it was already released.
  pub(super) fn release(&self) -> bool {
    let upstream = self.upstream.lock().take();
    match upstream {
      | Some(upstream) => {
        upstream.cancel();
        true
      },
      | None => false,
    }
  }
}
