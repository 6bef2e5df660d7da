use crate::core::characteristics::Characteristics;

/// Pull-based traversal cursor over a possibly infinite sequence.
pub trait Spliterator {
  /// Element type.
  type Item;

  /// Delivers the next element to `action`.
  ///
  /// Returns `false` without calling `action` when no element remains.
  fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

  /// Delivers every remaining element to `action`, in encounter order.
  fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Item)) {
    while self.try_advance(action) {}
  }

  /// Estimated number of remaining elements; exact when [`Characteristics::SIZED`] is reported.
  ///
  /// `u64::MAX` means unknown.
  fn estimate_size(&self) -> u64 {
    u64::MAX
  }

  /// Traversal properties of this spliterator.
  fn characteristics(&self) -> Characteristics {
    Characteristics::empty()
  }

  /// Splits off a prefix of the remaining elements into a new spliterator, if supported.
  fn try_split(&mut self) -> Option<Self>
  where
    Self: Sized, {
    None
  }

  /// Returns `true` when every flag in `characteristics` is reported.
  fn has_characteristics(&self, characteristics: Characteristics) -> bool {
    self.characteristics().contains(characteristics)
  }
}
