
use core::ops::{BitAnd, BitOr};

/// Traversal properties advertised by a [`Spliterator`](crate::core::Spliterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Characteristics(u32);

impl Characteristics {
  /// Encounter order is defined.
  pub const ORDERED: Self = Self(0x0000_0010);
  /// Elements are pairwise distinct.
  pub const DISTINCT: Self = Self(0x0000_0001);
  /// Elements follow a defined sort order.
  pub const SORTED: Self = Self(0x0000_0004);
  /// `estimate_size` is exact.
  pub const SIZED: Self = Self(0x0000_0040);
  /// No element is absent.
  pub const NONNULL: Self = Self(0x0000_0100);
  /// The source cannot be structurally modified.
  pub const IMMUTABLE: Self = Self(0x0000_0400);
  /// The source may be modified concurrently.
  pub const CONCURRENT: Self = Self(0x0000_1000);
  /// Splits are `SIZED` too.
  pub const SUBSIZED: Self = Self(0x0000_4000);

  /// No characteristics.
  #[must_use]
  pub const fn empty() -> Self {
    Self(0)
  }

  /// Returns the raw bits.
  #[must_use]
  pub const fn bits(self) -> u32 {
    self.0
  }

  /// Returns `true` when every flag in `other` is set.
  #[must_use]
  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  /// Returns the flags set in both values.
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Returns the flags set in either value.
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Returns `self` without the flags in `other`.
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }
}

impl BitOr for Characteristics {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl BitAnd for Characteristics {
  type Output = Self;

  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}
