mod spliterator_subscription;

use spliterator_subscription::SpliteratorSubscription;

use crate::core::{
  copyable_spliterator::CopyableSpliterator, operator::Operator, subscriber::SubscriberShared,
  subscription::SubscriptionShared,
};

/// Push source driven by a pull-based spliterator.
///
/// The spliterator is kept as a prototype; every subscription traverses its own
/// [`CopyableSpliterator::copy`], on the thread that requests demand.
pub struct SpliteratorOperator<S> {
  prototype: S,
}

impl<S> SpliteratorOperator<S>
where
  S: CopyableSpliterator + Send + Sync + 'static,
  S::Item: Send + 'static,
{
  /// Creates a source operator over `prototype`.
  #[must_use]
  pub const fn new(prototype: S) -> Self {
    Self { prototype }
  }

  /// Returns the prototype spliterator.
  #[must_use]
  pub const fn prototype(&self) -> &S {
    &self.prototype
  }
}

impl<S> Operator<S::Item> for SpliteratorOperator<S>
where
  S: CopyableSpliterator + Send + Sync + 'static,
  S::Item: Send + 'static,
{
  fn subscribe(&self, subscriber: SubscriberShared<S::Item>) -> SubscriptionShared {
    SpliteratorSubscription::new(self.prototype.copy(), subscriber).into_shared()
  }
}
