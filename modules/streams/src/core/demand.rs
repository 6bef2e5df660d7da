#[cfg(test)]
mod tests;

/// Demand signal used for backpressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demand {
  /// Finite demand with remaining count.
  Finite(u64),
  /// Unbounded demand.
  Unbounded,
}

impl Demand {
  /// Demand of zero elements.
  pub const NONE: Self = Self::Finite(0);

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    matches!(self, Self::Unbounded) || matches!(self, Self::Finite(remaining) if *remaining > 0)
  }

  /// Returns the remaining finite demand, if any.
  #[must_use]
  pub const fn remaining(&self) -> Option<u64> {
    match self {
      | Self::Finite(value) => Some(*value),
      | Self::Unbounded => None,
    }
  }

  /// Adds two demands; overflowing finite demand becomes unbounded.
  #[must_use]
  pub const fn saturating_add(self, other: Self) -> Self {
    match (self, other) {
      | (Self::Finite(left), Self::Finite(right)) => match left.checked_add(right) {
        | Some(total) if total < u64::MAX => Self::Finite(total),
        | _ => Self::Unbounded,
      },
      | _ => Self::Unbounded,
    }
  }

  /// Caps the demand at `limit` elements.
  #[must_use]
  pub const fn capped(self, limit: u64) -> u64 {
    match self {
      | Self::Finite(value) if value < limit => value,
      | _ => limit,
    }
  }
}

impl From<u64> for Demand {
  fn from(value: u64) -> Self {
    if value == u64::MAX { Self::Unbounded } else { Self::Finite(value) }
  }
}
