mod map_stage;

use map_stage::MapStage;
use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::{
  operator::{Operator, OperatorShared},
  stream_error::StreamError,
  subscriber::{Subscriber, SubscriberShared},
  subscription::{Subscription, SubscriptionShared},
};

type MapFn<T, U> = ArcShared<dyn Fn(T) -> Result<U, StreamError> + Send + Sync>;

/// One-to-one transform over an upstream operator.
///
/// A failing transform is reported through `on_error` and a replacement element is requested
/// from upstream, so downstream demand is still met.
pub struct MapOperator<T, U> {
  upstream: OperatorShared<T>,
  function: MapFn<T, U>,
}

impl<T, U> MapOperator<T, U>
where
  T: Send + 'static,
  U: Send + 'static,
{
  /// Creates a map stage with an infallible function.
  #[must_use]
  pub fn new<O, F>(upstream: O, function: F) -> Self
  where
    O: Operator<T> + 'static,
    F: Fn(T) -> U + Send + Sync + 'static, {
    Self::try_new(upstream, move |value| Ok(function(value)))
  }

  /// Creates a map stage with a fallible function.
  #[must_use]
  pub fn try_new<O, F>(upstream: O, function: F) -> Self
  where
    O: Operator<T> + 'static,
    F: Fn(T) -> Result<U, StreamError> + Send + Sync + 'static, {
    let function: MapFn<T, U> =
      ArcShared::new(function).into_dyn(|function| function as &(dyn Fn(T) -> Result<U, StreamError> + Send + Sync));
    Self { upstream: upstream.into_shared(), function }
  }
}

impl<T, U> Operator<U> for MapOperator<T, U>
where
  T: Send + 'static,
  U: Send + 'static,
{
  fn subscribe(&self, subscriber: SubscriberShared<U>) -> SubscriptionShared {
    let stage = ArcShared::new(MapStage::new(subscriber, self.function.clone()));
    let upstream = self.upstream.subscribe(stage.clone().into_dyn(|stage| stage as &dyn Subscriber<T>));
    stage.attach(upstream);
    stage.into_dyn(|stage| stage as &dyn Subscription)
  }
}
