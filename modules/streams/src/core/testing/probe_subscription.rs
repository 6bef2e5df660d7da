use portable_atomic::{AtomicBool, Ordering};

use crate::core::{
  demand::Demand,
  demand_counter::DemandCounter,
  stream_error::StreamError,
  subscriber::SubscriberShared,
  subscription::Subscription,
};

/// Subscription handed out by a [`TestSourceProbe`](super::TestSourceProbe).
pub(super) struct ProbeSubscription<T> {
  subscriber: SubscriberShared<T>,
  granted:    DemandCounter,
  open:       AtomicBool,
}

impl<T> ProbeSubscription<T> {
  pub(super) const fn new(subscriber: SubscriberShared<T>) -> Self {
    Self { subscriber, granted: DemandCounter::new(), open: AtomicBool::new(true) }
  }

  pub(super) fn subscriber(&self) -> &SubscriberShared<T> {
    &self.subscriber
  }

  pub(super) fn granted(&self) -> Demand {
    self.granted.current()
  }

  /// Closes the subscription; returns `true` for the call that closed it.
  pub(super) fn close(&self) -> bool {
    self.open.swap(false, Ordering::AcqRel)
  }
}

impl<T> Subscription for ProbeSubscription<T>
where
  T: Send,
{
  fn request(&self, demand: Demand) {
    if !self.is_open() {
      return;
    }
    if demand.has_demand() {
      self.granted.add(demand);
    } else {
      self.subscriber.on_error(StreamError::InvalidDemand);
    }
  }

  fn cancel(&self) {
    self.close();
  }

  fn is_open(&self) -> bool {
    self.open.load(Ordering::Acquire)
  }
}
