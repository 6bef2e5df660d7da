use alloc::vec::Vec;

use rivulet_utils_rs::core::sync::{ArcShared, SpinSyncMutex};

use super::probe_subscription::ProbeSubscription;
use crate::core::{
  demand::Demand,
  operator::Operator,
  stream_error::StreamError,
  subscriber::SubscriberShared,
  subscription::{Subscription, SubscriptionShared},
};

/// Manually driven source operator.
///
/// Tests push elements, errors and completion from any thread into the latest subscription and
/// inspect the demand it was granted. Elements are delivered even without demand so overflow paths
/// can be exercised.
pub struct TestSourceProbe<T> {
  subscriptions: ArcShared<SpinSyncMutex<Vec<ArcShared<ProbeSubscription<T>>>>>,
}

impl<T> TestSourceProbe<T>
where
  T: Send + 'static,
{
  /// Creates a probe with no subscriptions.
  #[must_use]
  pub fn new() -> Self {
    Self { subscriptions: ArcShared::new(SpinSyncMutex::new(Vec::new())) }
  }

  fn latest(&self) -> Option<ArcShared<ProbeSubscription<T>>> {
    self.subscriptions.lock().last().cloned()
  }

  fn latest_open(&self) -> Option<ArcShared<ProbeSubscription<T>>> {
    self.latest().filter(|subscription| subscription.is_open())
  }

  /// Pushes one element. Returns `false` when there is no open subscription.
  pub fn emit(&self, value: T) -> bool {
    match self.latest_open() {
      | Some(subscription) => {
        subscription.subscriber().on_next(value);
        true
      },
      | None => false,
    }
  }

  /// Pushes every element of `values`, stopping once the subscription closes. Returns how many
  /// were delivered.
  pub fn emit_all<I>(&self, values: I) -> usize
  where
    I: IntoIterator<Item = T>, {
    let mut delivered = 0;
    for value in values {
      if !self.emit(value) {
        break;
      }
      delivered += 1;
    }
    delivered
  }

  /// Signals completion and closes the subscription.
  pub fn complete(&self) {
    if let Some(subscription) = self.latest()
      && subscription.close()
    {
      subscription.subscriber().on_complete();
    }
  }

  /// Signals a non-terminal error.
  pub fn fail(&self, error: StreamError) {
    if let Some(subscription) = self.latest_open() {
      subscription.subscriber().on_error(error);
    }
  }

  /// Total demand granted to the latest subscription.
  #[must_use]
  pub fn requested(&self) -> Demand {
    self.latest().map_or(Demand::NONE, |subscription| subscription.granted())
  }

  /// Returns `true` when the latest subscription was cancelled or completed.
  #[must_use]
  pub fn is_cancelled(&self) -> bool {
    self.latest().is_some_and(|subscription| !subscription.is_open())
  }

  /// Number of subscriptions made so far.
  #[must_use]
  pub fn subscription_count(&self) -> usize {
    self.subscriptions.lock().len()
  }
}

impl<T> Operator<T> for TestSourceProbe<T>
where
  T: Send + 'static,
{
  fn subscribe(&self, subscriber: SubscriberShared<T>) -> SubscriptionShared {
    let subscription = ArcShared::new(ProbeSubscription::new(subscriber));
    self.subscriptions.lock().push(subscription.clone());
    subscription.into_dyn(|subscription| subscription as &dyn Subscription)
  }
}

impl<T> Clone for TestSourceProbe<T> {
  fn clone(&self) -> Self {
    Self { subscriptions: self.subscriptions.clone() }
  }
}

impl<T> Default for TestSourceProbe<T>
where
  T: Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
