use crate::core::spliterator::Spliterator;

/// Spliterator over an index range that can be re-sliced.
pub trait IndexableSpliterator: Spliterator + Sized {
  /// Index type of the bounds.
  type Index;

  /// Returns a spliterator with the lower bound replaced.
  #[must_use]
  fn start(&self, start: Self::Index) -> Self;

  /// Returns a spliterator with the upper bound replaced.
  #[must_use]
  fn end(&self, end: Self::Index) -> Self;

  /// Returns a spliterator with both bounds replaced.
  #[must_use]
  fn start_and_end(&self, start: Self::Index, end: Self::Index) -> Self;
}
