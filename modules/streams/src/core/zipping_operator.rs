mod left_subscriber;
mod pairing_token;
mod right_subscriber;
mod side;
mod zip_mode;
mod zip_side;
mod zip_state;

use left_subscriber::LeftSubscriber;
use right_subscriber::RightSubscriber;
use rivulet_utils_rs::core::sync::ArcShared;
use zip_mode::ZipMode;
use zip_state::ZipState;

use crate::core::{
  demand::Demand,
  operator::{Operator, OperatorShared},
  stream_error::StreamError,
  subscriber::{Subscriber, SubscriberShared},
  subscription::{Subscription, SubscriptionShared},
  zip_config::ZipConfig,
};

type CombineFn<L, R, O> = ArcShared<dyn Fn(L, R) -> Result<O, StreamError> + Send + Sync>;

/// Combines two upstream operators pairwise.
///
/// The `i`-th output is `combine(left[i], right[i])`, where each index counts that side's own
/// arrivals. Both upstreams may emit from their own threads. The output completes once either side
/// has completed and every element it delivered has been paired; at that point both upstream
/// subscriptions are cancelled.
///
/// Upstream errors and combine failures are forwarded to `on_error` without ending the stream.
pub struct ZippingOperator<L, R, O> {
  left:    OperatorShared<L>,
  right:   OperatorShared<R>,
  combine: CombineFn<L, R, O>,
  config:  ZipConfig,
}

impl<L, R, O> ZippingOperator<L, R, O>
where
  L: Send + 'static,
  R: Send + 'static,
  O: Send + 'static,
{
  /// Creates a zip with an infallible combiner.
  #[must_use]
  pub fn new<A, B, F>(left: A, right: B, combine: F) -> Self
  where
    A: Operator<L> + 'static,
    B: Operator<R> + 'static,
    F: Fn(L, R) -> O + Send + Sync + 'static, {
    Self::try_new(left, right, move |left, right| Ok(combine(left, right)))
  }

  /// Creates a zip whose combiner may fail; failures are reported per pair.
  #[must_use]
  pub fn try_new<A, B, F>(left: A, right: B, combine: F) -> Self
  where
    A: Operator<L> + 'static,
    B: Operator<R> + 'static,
    F: Fn(L, R) -> Result<O, StreamError> + Send + Sync + 'static, {
    let combine: CombineFn<L, R, O> = ArcShared::new(combine)
      .into_dyn(|combine| combine as &(dyn Fn(L, R) -> Result<O, StreamError> + Send + Sync));
    Self { left: left.into_shared(), right: right.into_shared(), combine, config: ZipConfig::default() }
  }

  /// Replaces the buffer configuration.
  #[must_use]
  pub fn with_config(mut self, config: ZipConfig) -> Self {
    self.config = config;
    self
  }

  /// Returns the active configuration.
  #[must_use]
  pub const fn config(&self) -> &ZipConfig {
    &self.config
  }

  fn open(&self, subscriber: SubscriberShared<O>, mode: ZipMode) -> ArcShared<ZipState<L, R, O>> {
    let state = ArcShared::new(ZipState::new(subscriber, self.combine.clone(), self.config, mode));
    let left = self.left.subscribe(
      ArcShared::new(LeftSubscriber::new(state.clone())).into_dyn(|subscriber| subscriber as &dyn Subscriber<L>),
    );
    let right = self.right.subscribe(
      ArcShared::new(RightSubscriber::new(state.clone())).into_dyn(|subscriber| subscriber as &dyn Subscriber<R>),
    );
    state.attach(left, right);
    state
  }
}

impl<L, R, O> Operator<O> for ZippingOperator<L, R, O>
where
  L: Send + 'static,
  R: Send + 'static,
  O: Send + 'static,
{
  fn subscribe(&self, subscriber: SubscriberShared<O>) -> SubscriptionShared {
    self.open(subscriber, ZipMode::Demand).into_dyn(|state| state as &dyn Subscription)
  }

  fn subscribe_all(&self, subscriber: SubscriberShared<O>) -> SubscriptionShared {
    let state = self.open(subscriber, ZipMode::Eager);
    state.request(Demand::Unbounded);
    state.into_dyn(|state| state as &dyn Subscription)
  }
}
