use crate::core::spliterator::Spliterator;

/// Spliterator able to traverse its source in either direction.
pub trait ReversibleSpliterator: Spliterator {
  /// Returns `true` when traversing backwards.
  fn is_reverse(&self) -> bool;

  /// Toggles the direction and rewinds to the end the new direction starts from.
  fn invert(&mut self) -> &mut Self;
}
