use rivulet_utils_rs::core::sync::SpinSyncMutex;

use crate::core::{
  demand::Demand,
  stream_error::StreamError,
  subscriber::{Subscriber, SubscriberShared},
  subscription::{Subscription, SubscriptionShared},
};

/// Subscriber towards upstream and subscription towards downstream of one map subscription.
pub(super) struct MapStage<T, U> {
  downstream: SubscriberShared<U>,
  function:   super::MapFn<T, U>,
  upstream:   SpinSyncMutex<Option<SubscriptionShared>>,
}

impl<T, U> MapStage<T, U> {
  pub(super) const fn new(downstream: SubscriberShared<U>, function: super::MapFn<T, U>) -> Self {
    Self { downstream, function, upstream: SpinSyncMutex::new(None) }
  }

  pub(super) fn attach(&self, upstream: SubscriptionShared) {
    *self.upstream.lock() = Some(upstream);
  }

  fn upstream(&self) -> Option<SubscriptionShared> {
    self.upstream.lock().clone()
  }

  fn release(&self) -> Option<SubscriptionShared> {
    self.upstream.lock().take()
  }
}

impl<T, U> Subscriber<T> for MapStage<T, U>
where
  T: Send,
  U: Send,
{
  fn on_next(&self, value: T) {
    match (self.function)(value) {
      | Ok(mapped) => self.downstream.on_next(mapped),
      | Err(error) => {
        tracing::debug!(%error, "map function failed, requesting a replacement element");
        self.downstream.on_error(error);
        if let Some(upstream) = self.upstream() {
          upstream.request(Demand::Finite(1));
        }
      },
    }
  }

  fn on_error(&self, error: StreamError) {
    self.downstream.on_error(error);
  }

  fn on_complete(&self) {
    drop(self.release());
    self.downstream.on_complete();
  }
}

impl<T, U> Subscription for MapStage<T, U>
where
  T: Send,
  U: Send,
{
  fn request(&self, demand: Demand) {
    match self.upstream() {
      | Some(upstream) => upstream.request(demand),
      | None if !demand.has_demand() => self.downstream.on_error(StreamError::InvalidDemand),
      | None => {},
    }
  }

  fn cancel(&self) {
    if let Some(upstream) = self.release() {
      upstream.cancel();
    }
  }

  fn is_open(&self) -> bool {
    self.upstream().is_some_and(|upstream| upstream.is_open())
  }
}

impl<T, U> core::fmt::Debug for MapStage<T, U> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("MapStage").field("attached", &self.upstream.lock().is_some()).finish()
  }
}

