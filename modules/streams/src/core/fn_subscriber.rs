use core::marker::PhantomData;

use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::{
  stream_error::StreamError,
  subscriber::{Subscriber, SubscriberShared},
};

/// Subscriber assembled from three callbacks.
pub struct FnSubscriber<T, N, E, C> {
  on_next:     N,
  on_error:    E,
  on_complete: C,
  _marker:     PhantomData<fn(T)>,
}

impl<T, N, E, C> FnSubscriber<T, N, E, C>
where
  T: 'static,
  N: Fn(T) + Send + Sync + 'static,
  E: Fn(StreamError) + Send + Sync + 'static,
  C: Fn() + Send + Sync + 'static,
{
  /// Creates a subscriber from element, error and completion handlers.
  #[must_use]
  pub const fn new(on_next: N, on_error: E, on_complete: C) -> Self {
    Self { on_next, on_error, on_complete, _marker: PhantomData }
  }

  /// Wraps the subscriber into a shared handle.
  #[must_use]
  pub fn into_shared(self) -> SubscriberShared<T> {
    ArcShared::new(self).into_dyn(|subscriber| subscriber as &dyn Subscriber<T>)
  }
}

impl<T, N, E, C> Subscriber<T> for FnSubscriber<T, N, E, C>
where
  N: Fn(T) + Send + Sync,
  E: Fn(StreamError) + Send + Sync,
  C: Fn() + Send + Sync,
{
  fn on_next(&self, value: T) {
    (self.on_next)(value);
  }

  fn on_error(&self, error: StreamError) {
    (self.on_error)(error);
  }

  fn on_complete(&self) {
    (self.on_complete)();
  }
}
