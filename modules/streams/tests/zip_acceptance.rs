//! Acceptance tests for zipped pipelines.

use std::{sync::Barrier, thread};

use rivulet_streams_rs::{
  core::{
    Demand, FlatMapSpliterator, IterSpliterator, MapOperator, Operator, ReversingRangeSpliterator, SpliteratorOperator,
    StreamError, ZipConfig, ZippingOperator,
    testing::{TestSinkProbe, TestSourceProbe},
  },
  std::OperatorIter,
};
use rivulet_utils_rs::core::sync::ArcShared;

#[test]
fn zip_of_spliterator_sources_pairs_by_position() {
  let numbers = SpliteratorOperator::new(ReversingRangeSpliterator::new(0, 6, false));
  let words =
    SpliteratorOperator::new(FlatMapSpliterator::new(IterSpliterator::new(vec!["ab", "c"]), |word: &'static str| {
      word.chars().collect::<Vec<_>>()
    }));
  let zip = ZippingOperator::new(numbers, words, |number, letter| format!("{number}{letter}"));
  let sink = TestSinkProbe::<String>::new();
  zip.subscribe_all(sink.subscriber());
  assert_eq!(sink.values(), vec!["1a", "2b", "3c"]);
  assert_eq!(sink.completion_count(), 1);
}

#[test]
fn zip_is_reusable_across_subscriptions() {
  let zip = ZippingOperator::new(
    SpliteratorOperator::new(IterSpliterator::new(vec![1, 2, 3])),
    SpliteratorOperator::new(IterSpliterator::new(vec![4, 5, 6])),
    |l: i32, r: i32| l * r,
  )
  .with_config(ZipConfig::with_capacity(2));
  for _ in 0..3 {
    let sink = TestSinkProbe::new();
    let subscription = zip.subscribe(sink.subscriber());
    subscription.request(Demand::Finite(1));
    assert_eq!(sink.values(), vec![4]);
    subscription.request(Demand::Finite(5));
    assert_eq!(sink.values(), vec![4, 10, 18]);
    assert_eq!(sink.completion_count(), 1);
  }
}

#[test]
fn mapped_zip_feeds_a_blocking_iterator() {
  let zip = ZippingOperator::new(
    SpliteratorOperator::new(ReversingRangeSpliterator::new(0, 1_001, true)),
    SpliteratorOperator::new(ReversingRangeSpliterator::new(0, 1_001, false)),
    |l: i64, r: i64| l + r,
  );
  let mapped = MapOperator::try_new(zip, |sum: i64| {
    if sum == 1_001 { Ok(sum) } else { Err(StreamError::failed("unbalanced")) }
  });
  let items: Vec<Result<i64, StreamError>> = OperatorIter::with_batch(&mapped, 32).collect();
  assert_eq!(items.len(), 1_000);
  assert!(items.iter().all(|item| *item == Ok(1_001)));
}

#[test]
fn simultaneous_completion_from_two_threads_completes_once() {
  for _ in 0..50 {
    let left = TestSourceProbe::<u8>::new();
    let right = TestSourceProbe::<u8>::new();
    let zip = ZippingOperator::new(left.clone(), right.clone(), |l, r| (l, r));
    let sink = TestSinkProbe::new();
    let subscription = zip.subscribe(sink.subscriber());
    subscription.request(Demand::Unbounded);

    let barrier = ArcShared::new(Barrier::new(2));
    let spawn = |probe: TestSourceProbe<u8>| {
      let barrier = barrier.clone();
      thread::spawn(move || {
        probe.emit(1);
        barrier.wait();
        probe.complete();
      })
    };
    let handles = [spawn(left), spawn(right)];
    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(sink.values(), vec![(1, 1)]);
    assert_eq!(sink.completion_count(), 1);
  }
}

#[test]
fn cancellation_from_another_thread_stops_both_producers() {
  let left = TestSourceProbe::<u32>::new();
  let right = TestSourceProbe::<u32>::new();
  let zip = ZippingOperator::new(left.clone(), right.clone(), |l, r| l + r);
  let sink = TestSinkProbe::new();
  let subscription = zip.subscribe_all(sink.subscriber());

  let producers = [left.clone(), right.clone()].map(|probe| thread::spawn(move || probe.emit_all(0..)));
  while sink.values().len() < 100 {
    std::hint::spin_loop();
  }
  let canceller = thread::spawn(move || subscription.cancel());
  canceller.join().unwrap();
  for producer in producers {
    producer.join().unwrap();
  }

  let observed = sink.values().len();
  assert!(left.is_cancelled());
  assert!(right.is_cancelled());
  assert!(!left.emit(0));
  assert_eq!(sink.values().len(), observed);
  assert!(!sink.is_completed());
}
