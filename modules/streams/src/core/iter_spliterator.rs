
use crate::core::{
  characteristics::Characteristics, copyable_spliterator::CopyableSpliterator, spliterator::Spliterator,
};

/// Spliterator over a cloneable iterable such as a `Vec` or a range.
///
/// The iterable is kept as the source description; [`CopyableSpliterator::copy`] restarts from it.
pub struct IterSpliterator<I>
where
  I: IntoIterator, {
  source: I,
  iter:   I::IntoIter,
  sized:  bool,
}

impl<I> IterSpliterator<I>
where
  I: IntoIterator + Clone,
{
  /// Creates a spliterator positioned at the first element of `source`.
  #[must_use]
  pub fn new(source: I) -> Self {
    let iter = source.clone().into_iter();
    let (lower, upper) = iter.size_hint();
    Self { source, iter, sized: upper == Some(lower) }
  }
}

impl<I> Spliterator for IterSpliterator<I>
where
  I: IntoIterator,
{
  type Item = I::Item;

  fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool {
    match self.iter.next() {
      | Some(value) => {
        action(value);
        true
      },
      | None => false,
    }
  }

  fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Item)) {
    for value in self.iter.by_ref() {
      action(value);
    }
  }

  fn estimate_size(&self) -> u64 {
    match self.iter.size_hint() {
      | (lower, Some(upper)) if lower == upper => lower as u64,
      | _ => u64::MAX,
    }
  }

  fn characteristics(&self) -> Characteristics {
    if self.sized {
      Characteristics::ORDERED | Characteristics::SIZED | Characteristics::SUBSIZED
    } else {
      Characteristics::ORDERED
    }
  }
}

impl<I> CopyableSpliterator for IterSpliterator<I>
where
  I: IntoIterator + Clone,
{
  fn copy(&self) -> Self {
    Self::new(self.source.clone())
  }
}
