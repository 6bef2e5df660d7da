use alloc::collections::VecDeque;

use portable_atomic::{AtomicBool, Ordering};
use rivulet_utils_rs::core::sync::SpinSyncMutex;

use super::{CombineFn, pairing_token::PairingToken, side::Side, zip_mode::ZipMode, zip_side::ZipSide};
use crate::core::{
  demand::Demand,
  demand_subscription::DemandSubscription,
  stream_error::StreamError,
  subscriber::SubscriberShared,
  subscription::{Subscription, SubscriptionShared},
  zip_config::ZipConfig,
};

/// Shared state of one zip subscription.
///
/// Arrivals pair under the [`PairingToken`]; matched pairs and upstream errors are queued and
/// handed downstream by a single active drainer, so user callbacks never run while the token is
/// held.
pub(super) struct ZipState<L, R, O> {
  downstream: SubscriberShared<O>,
  combine:    CombineFn<L, R, O>,
  mode:       ZipMode,
  capacity:   u64,
  demand:     DemandSubscription,
  token:      PairingToken,
  left:       ZipSide<L>,
  right:      ZipSide<R>,
  matched:    SpinSyncMutex<VecDeque<(L, R)>>,
  errors:     SpinSyncMutex<VecDeque<StreamError>>,
  exhausted:  AtomicBool,
}

impl<L, R, O> ZipState<L, R, O> {
  pub(super) fn new(downstream: SubscriberShared<O>, combine: CombineFn<L, R, O>, config: ZipConfig, mode: ZipMode) -> Self {
    Self {
      downstream,
      combine,
      mode,
      capacity: config.capacity() as u64,
      demand: DemandSubscription::new(),
      token: PairingToken::new(),
      left: ZipSide::new(config.buffer()),
      right: ZipSide::new(config.buffer()),
      matched: SpinSyncMutex::new(VecDeque::new()),
      errors: SpinSyncMutex::new(VecDeque::new()),
      exhausted: AtomicBool::new(false),
    }
  }

  /// Connects both upstream subscriptions; releases them at once if the zip already finished.
  pub(super) fn attach(&self, left: SubscriptionShared, right: SubscriptionShared) {
    self.left.attach(left);
    self.right.attach(right);
    if self.is_exhausted() || !self.demand.is_open() {
      self.release_upstreams();
    }
  }

  pub(super) fn on_left(&self, value: L) {
    self.arrive(Side::Left, |state| {
      let exhausted = match state.right.poll() {
        | Some(right) => {
          state.matched.lock().push_back((value, right));
          state.right.is_complete() && state.right.is_empty()
        },
        | None => {
          state.buffer_unmatched(&state.left, value);
          false
        },
      };
      // counted as pending until it sits in a buffer or the matched queue
      state.left.arrived();
      exhausted
    });
  }

  pub(super) fn on_right(&self, value: R) {
    self.arrive(Side::Right, |state| {
      let exhausted = match state.left.poll() {
        | Some(left) => {
          state.matched.lock().push_back((left, value));
          state.left.is_complete() && state.left.is_empty()
        },
        | None => {
          state.buffer_unmatched(&state.right, value);
          false
        },
      };
      state.right.arrived();
      exhausted
    });
  }

  pub(super) fn side_complete(&self, side: Side) {
    tracing::debug!(?side, "zip upstream completed");
    self.arrive(side, |state| match side {
      | Side::Left => {
        state.left.mark_complete();
        state.left.is_empty()
      },
      | Side::Right => {
        state.right.mark_complete();
        state.right.is_empty()
      },
    });
  }

  pub(super) fn side_error(&self, side: Side, error: StreamError) {
    tracing::debug!(?side, %error, "zip upstream signalled an error");
    self.errors.lock().push_back(error);
    if !self.is_exhausted() {
      match side {
        | Side::Left if self.left.outstanding() < self.capacity => self.left.request(1),
        | Side::Right if self.right.outstanding() < self.capacity => self.right.request(1),
        | _ => {},
      }
    }
    self.drain();
  }

  /// Runs `pair` while `side` holds the token. `pair` returns `true` when the zip became
  /// exhausted.
  fn arrive<F>(&self, side: Side, pair: F)
  where
    F: FnOnce(&Self) -> bool, {
    if !self.token.claim(side, || self.demand.is_open()) {
      return;
    }
    let exhausted = pair(self);
    self.token.release();
    if exhausted {
      self.exhaust();
    }
    self.drain();
  }

  fn buffer_unmatched<T>(&self, side: &ZipSide<T>, value: T) {
    if let Err(error) = side.offer(value) {
      tracing::warn!(%error, "zip upstream emitted beyond granted demand");
      self.errors.lock().push_back(error);
    } else {
      tracing::trace!("zip element buffered awaiting partner");
    }
  }

  fn is_exhausted(&self) -> bool {
    self.exhausted.load(Ordering::Acquire)
  }

  fn exhaust(&self) {
    if self.exhausted.swap(true, Ordering::AcqRel) {
      return;
    }
    tracing::debug!("zip exhausted, releasing upstreams");
    self.left.clear();
    self.right.clear();
    self.release_upstreams();
  }

  fn release_upstreams(&self) {
    self.left.release();
    self.right.release();
  }

  fn drain(&self) {
    self.demand.drain_with(|| self.drain_pass());
  }

  fn drain_pass(&self) {
    loop {
      while let Some(error) = self.next_error() {
        self.downstream.on_error(error);
        if !self.demand.is_open() {
          return;
        }
      }
      let reserved = self.mode == ZipMode::Demand;
      if reserved && !self.demand.consume_one() {
        break;
      }
      let Some((left, right)) = self.next_pair() else {
        if reserved {
          self.demand.restore_one();
        }
        break;
      };
      match (self.combine)(left, right) {
        | Ok(output) => {
          tracing::trace!("zip emitting pair");
          self.downstream.on_next(output);
        },
        | Err(error) => {
          tracing::debug!(%error, "zip combine failed");
          if reserved {
            self.demand.restore_one();
          }
          self.downstream.on_error(error);
        },
      }
      if !self.demand.is_open() {
        return;
      }
    }
    if self.is_exhausted() {
      if self.matched.lock().is_empty() {
        self.complete();
      }
      return;
    }
    self.refill();
  }

  fn next_error(&self) -> Option<StreamError> {
    self.errors.lock().pop_front()
  }

  fn next_pair(&self) -> Option<(L, R)> {
    self.matched.lock().pop_front()
  }

  /// Tops up each side's upstream demand so that the pairs still wanted downstream can be built,
  /// never exceeding the buffer capacity per side.
  fn refill(&self) {
    let window = match (self.mode, self.demand.requested()) {
      | (ZipMode::Eager, _) => self.capacity,
      | (ZipMode::Demand, requested) => requested.capped(self.capacity),
    };
    let wanted = window.saturating_sub(self.matched.lock().len() as u64);
    if wanted == 0 {
      return;
    }
    if !self.left.is_complete() {
      let missing = wanted.saturating_sub(self.left.outstanding());
      if missing > 0 {
        self.left.request(missing);
      }
    }
    if !self.right.is_complete() && !self.is_exhausted() {
      let missing = wanted.saturating_sub(self.right.outstanding());
      if missing > 0 {
        self.right.request(missing);
      }
    }
  }

  fn complete(&self) {
    if self.demand.cancel() {
      tracing::debug!("zip completed");
      self.downstream.on_complete();
    }
  }
}

impl<L, R, O> Subscription for ZipState<L, R, O>
where
  L: Send,
  R: Send,
  O: Send,
{
  fn request(&self, demand: Demand) {
    if !self.demand.is_open() {
      return;
    }
    if let Err(error) = self.demand.add_demand(demand) {
      self.errors.lock().push_back(error);
    }
    self.drain();
  }

  fn cancel(&self) {
    if self.demand.cancel() {
      tracing::debug!("zip subscription cancelled");
      self.release_upstreams();
      self.left.clear();
      self.right.clear();
      self.matched.lock().clear();
      self.errors.lock().clear();
    }
  }

  fn is_open(&self) -> bool {
    self.demand.is_open()
  }
}
