use crate::core::spliterator::Spliterator;

/// Spliterator whose traversal can be restarted independently.
pub trait CopyableSpliterator: Spliterator {
  /// Returns an independent spliterator over the same logical source.
  ///
  /// The copy does not share traversal state with `self`.
  #[must_use]
  fn copy(&self) -> Self
  where
    Self: Sized;
}
