use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::{
  demand::Demand,
  fn_subscriber::FnSubscriber,
  stream_error::StreamError,
  subscriber::SubscriberShared,
  subscription::SubscriptionShared,
};

/// Shared handle to an operator.
pub type OperatorShared<T> = ArcShared<dyn Operator<T>>;

/// A push stage.
///
/// Operators are immutable descriptions; every call to [`Operator::subscribe`] creates fresh
/// per-subscription state, so one operator may be subscribed to any number of times.
pub trait Operator<T>: Send + Sync {
  /// Subscribes with demand-driven backpressure. Nothing is emitted before the returned
  /// subscription receives a request.
  fn subscribe(&self, subscriber: SubscriberShared<T>) -> SubscriptionShared;

  /// Subscribes and immediately requests unbounded demand.
  fn subscribe_all(&self, subscriber: SubscriberShared<T>) -> SubscriptionShared {
    let subscription = self.subscribe(subscriber);
    subscription.request(Demand::Unbounded);
    subscription
  }

  /// Subscribes with three callbacks instead of a [`Subscriber`](crate::core::Subscriber).
  fn subscribe_fns<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> SubscriptionShared
  where
    Self: Sized,
    T: 'static,
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(StreamError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static, {
    self.subscribe(FnSubscriber::new(on_next, on_error, on_complete).into_shared())
  }

  /// Callback flavour of [`Operator::subscribe_all`].
  fn subscribe_all_fns<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> SubscriptionShared
  where
    Self: Sized,
    T: 'static,
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(StreamError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static, {
    self.subscribe_all(FnSubscriber::new(on_next, on_error, on_complete).into_shared())
  }

  /// Moves the operator behind a shared handle so it can feed other stages.
  fn into_shared(self) -> OperatorShared<T>
  where
    Self: Sized + 'static,
    T: 'static, {
    ArcShared::new(self).into_dyn(|operator| operator as &dyn Operator<T>)
  }
}

impl<T, O> Operator<T> for ArcShared<O>
where
  O: Operator<T> + ?Sized,
{
  fn subscribe(&self, subscriber: SubscriberShared<T>) -> SubscriptionShared {
    (**self).subscribe(subscriber)
  }

  fn subscribe_all(&self, subscriber: SubscriberShared<T>) -> SubscriptionShared {
    (**self).subscribe_all(subscriber)
  }
}
