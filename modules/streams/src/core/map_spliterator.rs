
use rivulet_utils_rs::core::sync::ArcShared;

use crate::core::{
  characteristics::Characteristics, copyable_spliterator::CopyableSpliterator,
  flat_map_spliterator::FlatMapSpliterator, spliterator::Spliterator,
};

/// Spliterator applying a function to every element of its source.
pub struct MapSpliterator<S, F> {
  source:   S,
  function: ArcShared<F>,
}

impl<S, F, U> MapSpliterator<S, F>
where
  S: Spliterator,
  F: Fn(S::Item) -> U,
{
  /// Creates a mapping spliterator over `source`.
  #[must_use]
  pub fn new(source: S, function: F) -> Self {
    Self { source, function: ArcShared::new(function) }
  }

  /// Returns the underlying source.
  #[must_use]
  pub const fn source(&self) -> &S {
    &self.source
  }

  /// Returns the shared mapping function.
  #[must_use]
  pub const fn function(&self) -> &ArcShared<F> {
    &self.function
  }

  /// Builds a flat-mapping spliterator over a copy of this spliterator's source whose mapper
  /// runs this function first, so the map stage does not add a traversal layer.
  #[must_use]
  pub fn compose_flat_map<M, I>(&self, mapper: M) -> FlatMapSpliterator<S, impl Fn(S::Item) -> I + use<S, F, U, M, I>, I>
  where
    S: CopyableSpliterator,
    M: Fn(U) -> I,
    I: IntoIterator, {
    let function = self.function.clone();
    FlatMapSpliterator::new(self.source.copy(), move |value: S::Item| mapper((*function)(value)))
  }
}

impl<S, F, U> Spliterator for MapSpliterator<S, F>
where
  S: Spliterator,
  F: Fn(S::Item) -> U,
{
  type Item = U;

  fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool {
    let function: &F = &self.function;
    self.source.try_advance(&mut |value| action(function(value)))
  }

  fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Item)) {
    let function: &F = &self.function;
    self.source.for_each_remaining(&mut |value| action(function(value)));
  }

  fn estimate_size(&self) -> u64 {
    self.source.estimate_size()
  }

  fn characteristics(&self) -> Characteristics {
    self.source.characteristics().difference(Characteristics::SORTED | Characteristics::DISTINCT)
  }
}

impl<S, F, U> CopyableSpliterator for MapSpliterator<S, F>
where
  S: CopyableSpliterator,
  F: Fn(S::Item) -> U,
{
  fn copy(&self) -> Self {
    Self { source: self.source.copy(), function: self.function.clone() }
  }
}
