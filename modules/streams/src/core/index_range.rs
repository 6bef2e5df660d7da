
/// Immutable description of the integers strictly between `min` and `max`, traversed forwards
/// or backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
  min:     i64,
  max:     i64,
  reverse: bool,
}

impl IndexRange {
  /// Creates a range over `min < index < max`. `min >= max - 1` describes an empty range.
  #[must_use]
  pub const fn new(min: i64, max: i64, reverse: bool) -> Self {
    Self { min, max, reverse }
  }

  /// Exclusive lower bound.
  #[must_use]
  pub const fn min(&self) -> i64 {
    self.min
  }

  /// Exclusive upper bound.
  #[must_use]
  pub const fn max(&self) -> i64 {
    self.max
  }

  /// Returns `true` when traversed from `max` down to `min`.
  #[must_use]
  pub const fn is_reverse(&self) -> bool {
    self.reverse
  }

  /// Returns the same bounds traversed in the other direction.
  #[must_use]
  pub const fn inverted(self) -> Self {
    Self { reverse: !self.reverse, ..self }
  }

  /// Returns `true` when `index` lies strictly inside the bounds.
  #[must_use]
  pub const fn contains(&self, index: i64) -> bool {
    self.min < index && index < self.max
  }

  /// Number of indices inside the bounds.
  #[must_use]
  pub const fn len(&self) -> u64 {
    let span = self.max as i128 - self.min as i128 - 1;
    if span <= 0 { 0 } else { span as u64 }
  }

  /// Returns `true` when no index lies inside the bounds.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// First index in traversal order; for an empty range the returned index lies outside the
  /// bounds.
  #[must_use]
  pub const fn origin(&self) -> i64 {
    if self.reverse { self.max.saturating_sub(1) } else { self.min.saturating_add(1) }
  }

  /// Number of indices from `index` (inclusive) to the end of the traversal.
  #[must_use]
  pub const fn remaining_from(&self, index: i64) -> u64 {
    if !self.contains(index) {
      return 0;
    }
    let span = if self.reverse { index as i128 - self.min as i128 } else { self.max as i128 - index as i128 };
    span as u64
  }
}
