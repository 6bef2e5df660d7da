use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::stream_error::StreamError;

/// Shared handle to a subscriber.
pub type SubscriberShared<T> = ArcShared<dyn Subscriber<T>>;

/// Consumer side of the push protocol.
///
/// Callbacks may be invoked from any producer thread, but never concurrently for the same
/// subscription. They must not block.
pub trait Subscriber<T>: Send + Sync {
  /// Receives the next element.
  fn on_next(&self, value: T);

  /// Receives a non-terminal error.
  fn on_error(&self, error: StreamError);

  /// Receives the completion signal. Called at most once per subscription.
  fn on_complete(&self);
}
