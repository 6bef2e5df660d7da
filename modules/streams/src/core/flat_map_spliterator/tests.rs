use super::FlatMapSpliterator;
use crate::core::{Characteristics, CopyableSpliterator, IterSpliterator, Spliterator};

fn expand(value: char) -> Vec<i32> {
  match value {
    | 'a' => vec![1, 2],
    | 'b' => vec![3],
    | _ => Vec::new(),
  }
}

#[test]
fn try_advance_yields_each_inner_element_then_reports_exhaustion() {
  let mut spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['a', 'b']), expand);
  let mut seen = Vec::new();
  assert!(spliterator.try_advance(&mut |value| seen.push(value)));
  assert!(spliterator.has_active_inner());
  assert!(spliterator.try_advance(&mut |value| seen.push(value)));
  assert!(spliterator.try_advance(&mut |value| seen.push(value)));
  assert!(!spliterator.try_advance(&mut |value| seen.push(value)));
  assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn for_each_remaining_flattens_in_one_pass() {
  let mut spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['a', 'b']), expand);
  let mut seen = Vec::new();
  spliterator.for_each_remaining(&mut |value| seen.push(value));
  assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn for_each_remaining_resumes_a_partially_consumed_inner_sequence() {
  let mut spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['a', 'b']), expand);
  let mut seen = Vec::new();
  assert!(spliterator.try_advance(&mut |value| seen.push(value)));
  spliterator.for_each_remaining(&mut |value| seen.push(value));
  assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn empty_expansions_are_skipped() {
  let mut spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['x', 'a', 'x', 'b', 'x']), expand);
  let mut seen = Vec::new();
  while spliterator.try_advance(&mut |value| seen.push(value)) {}
  assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn copy_starts_a_fresh_traversal_without_the_active_inner_iterator() {
  let mut spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['a', 'b']), expand);
  assert!(spliterator.try_advance(&mut |_| {}));

  let mut copy = spliterator.copy();
  assert!(!copy.has_active_inner());
  let mut copied = Vec::new();
  copy.for_each_remaining(&mut |value| copied.push(value));
  assert_eq!(copied, vec![1, 2, 3]);

  let mut rest = Vec::new();
  spliterator.for_each_remaining(&mut |value| rest.push(value));
  assert_eq!(rest, vec![2, 3]);
}

#[test]
fn keeps_only_the_ordered_characteristic() {
  let spliterator = FlatMapSpliterator::new(IterSpliterator::new(vec!['a']), expand);
  assert_eq!(spliterator.characteristics(), Characteristics::ORDERED);
  assert_eq!(spliterator.estimate_size(), u64::MAX);

  let empty = FlatMapSpliterator::new(IterSpliterator::new(Vec::<char>::new()), expand);
  assert_eq!(empty.estimate_size(), 0);
}
