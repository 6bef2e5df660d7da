#[cfg(test)]
mod tests;

/// Thin wrapper around [`spin::Mutex`].
///
/// Critical sections guarded by this type must stay short and must never call back into user
/// code.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }
}

impl<T: Default> Default for SpinSyncMutex<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}
