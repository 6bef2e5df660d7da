use rivulet_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use crate::core::{
  characteristics::Characteristics,
  demand::Demand,
  demand_subscription::DemandSubscription,
  spliterator::Spliterator,
  subscriber::SubscriberShared,
  subscription::{Subscription, SubscriptionShared},
};

/// Per-subscriber traversal state of a [`SpliteratorOperator`](super::SpliteratorOperator).
pub(crate) struct SpliteratorSubscription<S>
where
  S: Spliterator, {
  demand:     DemandSubscription,
  source:     SpinSyncMutex<S>,
  subscriber: SubscriberShared<S::Item>,
}

impl<S> SpliteratorSubscription<S>
where
  S: Spliterator + Send + 'static,
  S::Item: Send + 'static,
{
  pub(crate) const fn new(source: S, subscriber: SubscriberShared<S::Item>) -> Self {
    Self { demand: DemandSubscription::new(), source: SpinSyncMutex::new(source), subscriber }
  }

  pub(crate) fn into_shared(self) -> SubscriptionShared {
    ArcShared::new(self).into_dyn(|subscription| subscription as &dyn Subscription)
  }

  fn emit(&self) {
    while self.demand.is_open() && self.demand.consume_one() {
      let mut next = None;
      let exhausted = {
        let mut source = self.source.lock();
        let advanced = source.try_advance(&mut |value| next = Some(value));
        !advanced || (source.has_characteristics(Characteristics::SIZED) && source.estimate_size() == 0)
      };
      if let Some(value) = next {
        self.subscriber.on_next(value);
      }
      if exhausted {
        self.complete();
        return;
      }
    }
  }

  fn complete(&self) {
    if self.demand.cancel() {
      tracing::debug!("spliterator source exhausted");
      self.subscriber.on_complete();
    }
  }
}

impl<S> Subscription for SpliteratorSubscription<S>
where
  S: Spliterator + Send + 'static,
  S::Item: Send + 'static,
{
  fn request(&self, demand: Demand) {
    if !self.demand.is_open() {
      return;
    }
    if let Err(error) = self.demand.request_with(demand, || self.emit()) {
      self.subscriber.on_error(error);
    }
  }

  fn cancel(&self) {
    if self.demand.cancel() {
      tracing::debug!("spliterator subscription cancelled");
    }
  }

  fn is_open(&self) -> bool {
    self.demand.is_open()
  }
}
