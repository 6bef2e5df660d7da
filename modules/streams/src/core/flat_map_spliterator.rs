#[cfg(test)]
mod tests;

use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::{
  characteristics::Characteristics, copyable_spliterator::CopyableSpliterator, spliterator::Spliterator,
};

/// Pull-based flattening spliterator.
///
/// Each outer element is expanded by the mapper into an inner sequence whose elements are
/// handed out one at a time; the partially consumed inner iterator survives between
/// [`Spliterator::try_advance`] calls.
pub struct FlatMapSpliterator<S, F, I>
where
  I: IntoIterator, {
  source: S,
  mapper: ArcShared<F>,
  active: Option<I::IntoIter>,
}

impl<S, F, I> FlatMapSpliterator<S, F, I>
where
  S: Spliterator,
  F: Fn(S::Item) -> I,
  I: IntoIterator,
{
  /// Creates a flat-mapping spliterator over `source`.
  #[must_use]
  pub fn new(source: S, mapper: F) -> Self {
    Self { source, mapper: ArcShared::new(mapper), active: None }
  }

  /// Returns `true` while an inner sequence is partially consumed.
  #[must_use]
  pub const fn has_active_inner(&self) -> bool {
    self.active.is_some()
  }
}

impl<S, F, I> Spliterator for FlatMapSpliterator<S, F, I>
where
  S: Spliterator,
  F: Fn(S::Item) -> I,
  I: IntoIterator,
{
  type Item = I::Item;

  fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool {
    loop {
      if let Some(active) = self.active.as_mut() {
        if let Some(value) = active.next() {
          action(value);
          return true;
        }
        self.active = None;
      }

      let mapper: &F = &self.mapper;
      let mut expanded = None;
      if !self.source.try_advance(&mut |outer| expanded = Some(mapper(outer).into_iter())) {
        return false;
      }
      // empty expansions fall through to the next outer element
      self.active = expanded;
    }
  }

  fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Item)) {
    if let Some(active) = self.active.take() {
      for value in active {
        action(value);
      }
    }
    let mapper: &F = &self.mapper;
    self.source.for_each_remaining(&mut |outer| {
      for value in mapper(outer) {
        action(value);
      }
    });
  }

  fn estimate_size(&self) -> u64 {
    if self.active.is_none() && self.source.estimate_size() == 0 { 0 } else { u64::MAX }
  }

  fn characteristics(&self) -> Characteristics {
    self.source.characteristics() & Characteristics::ORDERED
  }
}

impl<S, F, I> CopyableSpliterator for FlatMapSpliterator<S, F, I>
where
  S: CopyableSpliterator,
  F: Fn(S::Item) -> I,
  I: IntoIterator,
{
  fn copy(&self) -> Self {
    Self { source: self.source.copy(), mapper: self.mapper.clone(), active: None }
  }
}
