use std::thread;

use super::OperatorIter;
use crate::core::{
  IterSpliterator, MapOperator, Operator, ReversingRangeSpliterator, SpliteratorOperator, StreamError, SubscriberShared,
  SubscriptionShared, ZippingOperator,
  testing::{TestSinkProbe, TestSourceProbe},
};

#[test]
fn yields_every_element_then_ends() {
  let operator = SpliteratorOperator::new(ReversingRangeSpliterator::new(0, 200, false));
  let values: Vec<i64> = OperatorIter::with_batch(&operator, 16).map(Result::unwrap).collect();
  let expected: Vec<i64> = (1..200).collect();
  assert_eq!(values, expected);
}

#[test]
fn errors_are_yielded_without_ending_iteration() {
  let operator = MapOperator::try_new(SpliteratorOperator::new(IterSpliterator::new(vec![1, 2, 3])), |value: i32| {
    if value == 2 { Err(StreamError::failed("two")) } else { Ok(value) }
  });
  let items: Vec<Result<i32, StreamError>> = OperatorIter::new(&operator).collect();
  assert_eq!(items, vec![Ok(1), Err(StreamError::failed("two")), Ok(3)]);
}

#[test]
fn requests_the_next_batch_only_after_the_previous_one_was_taken() {
  let source = TestSourceProbe::<i32>::new();
  let mut iter = OperatorIter::with_batch(&source, 2);
  assert_eq!(source.requested(), crate::core::Demand::Finite(2));
  source.emit_all([1, 2]);
  assert_eq!(iter.next(), Some(Ok(1)));
  assert_eq!(iter.next(), Some(Ok(2)));
  assert_eq!(source.requested(), crate::core::Demand::Finite(2));

  source.emit(3);
  assert_eq!(iter.next(), Some(Ok(3)));
  assert_eq!(source.requested(), crate::core::Demand::Finite(4));
}

#[test]
fn zipped_producer_threads_feed_a_blocking_consumer() {
  let left = TestSourceProbe::<i32>::new();
  let right = TestSourceProbe::<i32>::new();
  let zip = ZippingOperator::new(left.clone(), right.clone(), |l, r| l + r);
  let iter = OperatorIter::new(&zip);

  let producers = [(left, 1), (right, 100)].map(|(probe, factor)| {
    thread::spawn(move || {
      probe.emit_all((0..20).map(|value| value * factor));
      probe.complete();
    })
  });
  let values: Vec<i32> = iter.map(Result::unwrap).collect();
  for producer in producers {
    producer.join().unwrap();
  }
  let expected: Vec<i32> = (0..20).map(|value| value * 101).collect();
  assert_eq!(values, expected);
}

#[test]
fn dropping_the_iterator_cancels_the_subscription() {
  let source = TestSourceProbe::<i32>::new();
  let mut iter = OperatorIter::new(&source);
  source.emit(7);
  assert_eq!(iter.next(), Some(Ok(7)));
  drop(iter);
  assert!(source.is_cancelled());
}

struct Forgetful(TestSourceProbe<i32>);

impl Operator<i32> for Forgetful {
  fn subscribe(&self, _subscriber: SubscriberShared<i32>) -> SubscriptionShared {
    self.0.subscribe(TestSinkProbe::new().subscriber())
  }
}

#[test]
fn a_producer_that_drops_the_subscriber_ends_with_cancelled() {
  let mut iter = OperatorIter::new(&Forgetful(TestSourceProbe::new()));
  assert_eq!(iter.next(), Some(Err(StreamError::Cancelled)));
  assert_eq!(iter.next(), None);
}
