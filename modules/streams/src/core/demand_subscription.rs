//! Demand bookkeeping shared by every subscription implementation.

#[cfg(test)]
mod tests;

use portable_atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::core::{demand::Demand, demand_counter::DemandCounter, stream_error::StreamError};

/// Open/cancelled state, requested-unit counter and single-active-request guard of one
/// subscription.
///
/// Producers call [`DemandSubscription::drain_with`] whenever something may be emitted; only one
/// thread runs the work closure at a time and passes missed while it runs are replayed before it
/// returns, so re-entrant requests from inside `on_next` never recurse.
#[derive(Debug)]
pub struct DemandSubscription {
  open:             AtomicBool,
  requested:        DemandCounter,
  work_in_progress: AtomicUsize,
}

impl DemandSubscription {
  /// Creates an open subscription with no demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { open: AtomicBool::new(true), requested: DemandCounter::new(), work_in_progress: AtomicUsize::new(0) }
  }

  /// Returns `true` until the subscription is cancelled or closed.
  #[must_use]
  pub fn is_open(&self) -> bool {
    self.open.load(Ordering::Acquire)
  }

  /// Returns the outstanding demand.
  #[must_use]
  pub fn requested(&self) -> Demand {
    self.requested.current()
  }

  /// Consumes one unit of demand for an emission.
  #[must_use]
  pub fn consume_one(&self) -> bool {
    self.requested.consume_one()
  }

  /// Gives back one unit taken by [`DemandSubscription::consume_one`] that was not used for an
  /// emission.
  pub fn restore_one(&self) {
    self.requested.add(Demand::Finite(1));
  }

  /// Records additional demand.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `demand` is `Finite(0)`; the state is left
  /// untouched.
  pub fn add_demand(&self, demand: Demand) -> Result<Demand, StreamError> {
    if !demand.has_demand() {
      tracing::warn!("rejected non-positive demand request");
      return Err(StreamError::InvalidDemand);
    }
    Ok(self.requested.add(demand))
  }

  /// Records additional demand and services it with `work`.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `demand` is `Finite(0)`; `work` is not run.
  pub fn request_with<F>(&self, demand: Demand, work: F) -> Result<(), StreamError>
  where
    F: FnMut(), {
    self.add_demand(demand)?;
    self.drain_with(work);
    Ok(())
  }

  /// Runs `work` unless another pass is already active, in which case that pass repeats once
  /// more after its current iteration.
  pub fn drain_with<F>(&self, mut work: F)
  where
    F: FnMut(), {
    if self.work_in_progress.fetch_add(1, Ordering::AcqRel) != 0 {
      return;
    }
    let mut missed = 1;
    loop {
      if !self.is_open() {
        return;
      }
      work();
      let remaining = self.work_in_progress.fetch_sub(missed, Ordering::AcqRel) - missed;
      if remaining == 0 {
        break;
      }
      missed = remaining;
    }
  }

  /// Cancels the subscription.
  ///
  /// Returns `true` for the call that performed the transition; later calls return `false`.
  pub fn cancel(&self) -> bool {
    self.open.swap(false, Ordering::AcqRel)
  }
}

impl Default for DemandSubscription {
  fn default() -> Self {
    Self::new()
  }
}
