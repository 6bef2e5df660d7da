use alloc::vec::Vec;

use portable_atomic::{AtomicUsize, Ordering};
use rivulet_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use crate::core::{
  stream_error::StreamError,
  subscriber::{Subscriber, SubscriberShared},
};

struct Recorded<T> {
  values:      SpinSyncMutex<Vec<T>>,
  errors:      SpinSyncMutex<Vec<StreamError>>,
  completions: AtomicUsize,
}

impl<T> Subscriber<T> for Recorded<T>
where
  T: Send,
{
  fn on_next(&self, value: T) {
    self.values.lock().push(value);
  }

  fn on_error(&self, error: StreamError) {
    self.errors.lock().push(error);
  }

  fn on_complete(&self) {
    self.completions.fetch_add(1, Ordering::AcqRel);
  }
}

/// Subscriber that records every signal it receives.
pub struct TestSinkProbe<T> {
  recorded: ArcShared<Recorded<T>>,
}

impl<T> TestSinkProbe<T>
where
  T: Send + 'static,
{
  /// Creates an empty probe.
  #[must_use]
  pub fn new() -> Self {
    Self {
      recorded: ArcShared::new(Recorded {
        values:      SpinSyncMutex::new(Vec::new()),
        errors:      SpinSyncMutex::new(Vec::new()),
        completions: AtomicUsize::new(0),
      }),
    }
  }

  /// Returns a subscriber handle feeding this probe.
  #[must_use]
  pub fn subscriber(&self) -> SubscriberShared<T> {
    self.recorded.clone().into_dyn(|recorded| recorded as &dyn Subscriber<T>)
  }

  /// Elements received so far, in order.
  #[must_use]
  pub fn values(&self) -> Vec<T>
  where
    T: Clone, {
    self.recorded.values.lock().clone()
  }

  /// Errors received so far, in order.
  #[must_use]
  pub fn errors(&self) -> Vec<StreamError> {
    self.recorded.errors.lock().clone()
  }

  /// Number of `on_complete` signals received.
  #[must_use]
  pub fn completion_count(&self) -> usize {
    self.recorded.completions.load(Ordering::Acquire)
  }

  /// Returns `true` once completion was signalled.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.completion_count() > 0
  }
}

impl<T> Clone for TestSinkProbe<T> {
  fn clone(&self) -> Self {
    Self { recorded: self.recorded.clone() }
  }
}

impl<T> Default for TestSinkProbe<T>
where
  T: Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
