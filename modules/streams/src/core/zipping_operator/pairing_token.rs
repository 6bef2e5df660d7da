use portable_atomic::{AtomicU8, Ordering};

use super::side::Side;


const IDLE: u8 = 0;

/// Two-bit status a side claims before it touches either zip buffer.
#[derive(Debug)]
pub(super) struct PairingToken {
  status: AtomicU8,
}

impl PairingToken {
  pub(super) const fn new() -> Self {
    Self { status: AtomicU8::new(IDLE) }
  }

  /// Spins until `side` owns the token.
  ///
  /// Returns `false` without claiming once `is_open` reports the subscription closed.
  pub(super) fn claim<F>(&self, side: Side, is_open: F) -> bool
  where
    F: Fn() -> bool, {
    loop {
      if self.status.compare_exchange_weak(IDLE, side.bit(), Ordering::Acquire, Ordering::Relaxed).is_ok() {
        return true;
      }
      if !is_open() {
        return false;
      }
      core::hint::spin_loop();
    }
  }

  pub(super) fn release(&self) {
    self.status.store(IDLE, Ordering::Release);
  }
}
