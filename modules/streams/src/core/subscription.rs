use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::demand::Demand;

/// Shared handle to a subscription.
pub type SubscriptionShared = ArcShared<dyn Subscription>;

/// Link between one subscriber and one producer.
pub trait Subscription: Send + Sync {
  /// Grants `demand` more elements to the producer.
  ///
  /// `Demand::Finite(0)` is a protocol violation reported through the subscriber's `on_error`.
  fn request(&self, demand: Demand);

  /// Stops delivery and releases upstream subscriptions. Idempotent.
  fn cancel(&self);

  /// Returns `false` once the subscription has been cancelled or has completed.
  fn is_open(&self) -> bool;
}
