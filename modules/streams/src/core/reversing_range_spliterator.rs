
use crate::core::{
  characteristics::Characteristics, copyable_spliterator::CopyableSpliterator, index_range::IndexRange,
  indexable_spliterator::IndexableSpliterator, reversible_spliterator::ReversibleSpliterator,
  spliterator::Spliterator,
};

/// Restartable cursor over an [`IndexRange`].
///
/// The range is the shared, immutable description; the cursor only owns its start and current
/// positions, so [`CopyableSpliterator::copy`] is a cheap value copy that rewinds to the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversingRangeSpliterator {
  range: IndexRange,
  start: i64,
  index: i64,
}

impl ReversingRangeSpliterator {
  /// Creates a cursor over the integers strictly between `min` and `max`.
  #[must_use]
  pub const fn new(min: i64, max: i64, reverse: bool) -> Self {
    Self::from_range(IndexRange::new(min, max, reverse))
  }

  /// Creates a cursor positioned at the origin of `range`.
  #[must_use]
  pub const fn from_range(range: IndexRange) -> Self {
    let origin = range.origin();
    Self { range, start: origin, index: origin }
  }

  /// Returns the range description.
  #[must_use]
  pub const fn range(&self) -> IndexRange {
    self.range
  }

  /// Returns the next index to be produced.
  #[must_use]
  pub const fn position(&self) -> i64 {
    self.index
  }

  fn remaining(&self) -> u64 {
    self.range.remaining_from(self.index)
  }
}

impl Spliterator for ReversingRangeSpliterator {
  type Item = i64;

  fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool {
    if !self.range.contains(self.index) {
      return false;
    }
    let current = self.index;
    // contains() keeps both steps inside i64
    self.index = if self.range.is_reverse() { current - 1 } else { current + 1 };
    action(current);
    true
  }

  fn estimate_size(&self) -> u64 {
    self.remaining()
  }

  fn characteristics(&self) -> Characteristics {
    Characteristics::ORDERED
      | Characteristics::SIZED
      | Characteristics::SUBSIZED
      | Characteristics::IMMUTABLE
      | Characteristics::DISTINCT
  }

  fn try_split(&mut self) -> Option<Self> {
    let remaining = self.remaining();
    if remaining < 2 {
      return None;
    }
    let half = (remaining / 2) as i64;
    let reverse = self.range.is_reverse();
    if reverse {
      let mid = self.index - half;
      let prefix = Self { range: IndexRange::new(mid, self.index + 1, true), start: self.index, index: self.index };
      self.range = IndexRange::new(self.range.min(), mid + 1, true);
      self.start = mid;
      self.index = mid;
      Some(prefix)
    } else {
      let mid = self.index + half;
      let prefix = Self { range: IndexRange::new(self.index - 1, mid, false), start: self.index, index: self.index };
      self.range = IndexRange::new(mid - 1, self.range.max(), false);
      self.start = mid;
      self.index = mid;
      Some(prefix)
    }
  }
}

impl ReversibleSpliterator for ReversingRangeSpliterator {
  fn is_reverse(&self) -> bool {
    self.range.is_reverse()
  }

  fn invert(&mut self) -> &mut Self {
    *self = Self::from_range(self.range.inverted());
    self
  }
}

impl IndexableSpliterator for ReversingRangeSpliterator {
  type Index = i64;

  fn start(&self, start: i64) -> Self {
    Self::new(start, self.range.max(), self.range.is_reverse())
  }

  fn end(&self, end: i64) -> Self {
    Self::new(self.range.min(), end, self.range.is_reverse())
  }

  fn start_and_end(&self, start: i64, end: i64) -> Self {
    Self::new(start, end, self.range.is_reverse())
  }
}

impl CopyableSpliterator for ReversingRangeSpliterator {
  fn copy(&self) -> Self {
    Self { range: self.range, start: self.start, index: self.start }
  }
}
