use std::thread;

use rivulet_utils_rs::core::sync::ArcShared;

use super::DemandCounter;
use crate::core::Demand;

#[test]
fn add_then_consume_counts_down_to_zero() {
  let counter = DemandCounter::new();
  assert_eq!(counter.add(Demand::Finite(2)), Demand::Finite(2));
  assert!(counter.consume_one());
  assert!(counter.consume_one());
  assert!(!counter.consume_one());
  assert_eq!(counter.current(), Demand::NONE);
}

#[test]
fn unbounded_demand_is_never_decremented() {
  let counter = DemandCounter::new();
  counter.add(Demand::Finite(3));
  assert_eq!(counter.add(Demand::Unbounded), Demand::Unbounded);
  for _ in 0..10 {
    assert!(counter.consume_one());
  }
  assert_eq!(counter.current(), Demand::Unbounded);
}

#[test]
fn overflowing_finite_demand_becomes_unbounded() {
  let counter = DemandCounter::new();
  counter.add(Demand::Finite(u64::MAX - 1));
  assert_eq!(counter.add(Demand::Finite(5)), Demand::Unbounded);
}

#[test]
fn concurrent_consumers_never_exceed_granted_demand() {
  const GRANTED: u64 = 1_000;
  let counter = ArcShared::new(DemandCounter::new());
  counter.add(Demand::Finite(GRANTED));

  let handles: Vec<_> = (0..4)
    .map(|_| {
      let counter = counter.clone();
      thread::spawn(move || {
        let mut consumed = 0_u64;
        while counter.consume_one() {
          consumed += 1;
        }
        consumed
      })
    })
    .collect();
  let total: u64 = handles.into_iter().map(|handle| handle.join().expect("consumer panicked")).sum();
  assert_eq!(total, GRANTED);
}
