use core::cell::Cell;

use super::DemandSubscription;
use crate::core::{Demand, StreamError};

#[test]
fn zero_demand_is_rejected_without_running_work() {
  let subscription = DemandSubscription::new();
  let mut runs = 0;
  assert_eq!(subscription.request_with(Demand::NONE, || runs += 1), Err(StreamError::InvalidDemand));
  assert_eq!(runs, 0);
  assert_eq!(subscription.requested(), Demand::NONE);
  assert!(subscription.is_open());
}

#[test]
fn request_runs_work_with_recorded_demand() {
  let subscription = DemandSubscription::new();
  let mut emitted = 0;
  subscription
    .request_with(Demand::Finite(3), || {
      while subscription.consume_one() {
        emitted += 1;
      }
    })
    .expect("positive demand");
  assert_eq!(emitted, 3);
  assert_eq!(subscription.requested(), Demand::NONE);
}

#[test]
fn reentrant_drain_is_replayed_instead_of_recursing() {
  let subscription = DemandSubscription::new();
  let depth = Cell::new(0_u32);
  let max_depth = Cell::new(0_u32);
  let passes = Cell::new(0_u32);

  fn pass(subscription: &DemandSubscription, depth: &Cell<u32>, max_depth: &Cell<u32>, passes: &Cell<u32>) {
    depth.set(depth.get() + 1);
    max_depth.set(max_depth.get().max(depth.get()));
    passes.set(passes.get() + 1);
    if passes.get() < 3 {
      subscription.drain_with(|| pass(subscription, depth, max_depth, passes));
    }
    depth.set(depth.get() - 1);
  }

  subscription.drain_with(|| pass(&subscription, &depth, &max_depth, &passes));
  assert_eq!(passes.get(), 3);
  assert_eq!(max_depth.get(), 1);
}

#[test]
fn cancel_is_idempotent_and_stops_work() {
  let subscription = DemandSubscription::new();
  assert!(subscription.cancel());
  assert!(!subscription.cancel());
  let mut runs = 0;
  subscription.request_with(Demand::Finite(1), || runs += 1).expect("positive demand");
  assert_eq!(runs, 0);
  assert!(!subscription.is_open());
}

#[test]
fn restored_units_can_be_consumed_again() {
  let subscription = DemandSubscription::new();
  subscription.add_demand(Demand::Finite(1)).expect("positive demand");
  assert!(subscription.consume_one());
  assert!(!subscription.consume_one());
  subscription.restore_one();
  assert_eq!(subscription.requested(), Demand::Finite(1));
  assert!(subscription.consume_one());

  subscription.add_demand(Demand::Unbounded).expect("positive demand");
  subscription.restore_one();
  assert_eq!(subscription.requested(), Demand::Unbounded);
}
