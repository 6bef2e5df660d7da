/// One of the two zipped upstreams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
  Left,
  Right,
}

impl Side {
  /// Token value held while this side owns the buffers.
  pub(super) const fn bit(self) -> u8 {
    match self {
      | Self::Left => 0b01,
      | Self::Right => 0b10,
    }
  }
}
