//! Atomic demand counter.

#[cfg(test)]
mod tests;

use portable_atomic::{AtomicU64, Ordering};

use crate::core::demand::Demand;

const UNBOUNDED: u64 = u64::MAX;

/// Outstanding downstream demand, shared between the requesting consumer and the emitting
/// producer.
///
/// `u64::MAX` encodes unbounded demand; once reached the counter is never decremented again.
#[derive(Debug, Default)]
pub struct DemandCounter {
  requested: AtomicU64,
}

impl DemandCounter {
  /// Creates a counter with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { requested: AtomicU64::new(0) }
  }

  /// Returns the current demand.
  #[must_use]
  pub fn current(&self) -> Demand {
    Demand::from(self.requested.load(Ordering::Acquire))
  }

  /// Adds demand, saturating into unbounded, and returns the new total.
  pub fn add(&self, demand: Demand) -> Demand {
    let amount = match demand {
      | Demand::Unbounded => UNBOUNDED,
      | Demand::Finite(amount) => amount,
    };
    let previous = self
      .requested
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| Some(current.saturating_add(amount)))
      .unwrap_or_else(|current| current);
    Demand::from(previous.saturating_add(amount))
  }

  /// Consumes a single unit of demand when available.
  ///
  /// Unbounded demand always succeeds without being decremented.
  #[must_use]
  pub fn consume_one(&self) -> bool {
    self
      .requested
      .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| match current {
        | UNBOUNDED => Some(UNBOUNDED),
        | 0 => None,
        | value => Some(value - 1),
      })
      .is_ok()
  }
}
