use alloc::sync::Arc;
use core::ptr;


/// Shared wrapper backed by [`alloc::sync::Arc`].
///
/// Stream stages hand these out for subscribers, subscriptions and operator handles so that a
/// single concrete value can be observed from every producer thread.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }

  fn into_raw(self) -> *const T {
    Arc::into_raw(self.0)
  }

  /// # Safety
  ///
  /// The pointer must originate from `ArcShared::into_raw`.
  unsafe fn from_raw(ptr: *const T) -> Self {
    Self(unsafe { Arc::from_raw(ptr) })
  }

  /// Converts the shared handle into another dynamically sized representation.
  ///
  /// `cast` must return a reference to the same allocation, typically an unsizing coercion such as
  /// `|value| value as &dyn Trait`.
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(&T) -> &U, {
    let raw = self.into_raw();
    unsafe {
      let reference = &*raw;
      let trait_reference = cast(reference);
      let trait_ptr = ptr::from_ref(trait_reference);
      ArcShared::from_raw(trait_ptr)
    }
  }

  /// Returns the number of strong handles pointing at the allocation.
  #[must_use]
  pub fn strong_count(this: &Self) -> usize {
    Arc::strong_count(&this.0)
  }

  /// Returns true when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }

  /// Returns the inner value when this is the only handle.
  ///
  /// # Errors
  ///
  /// Returns the handle back when other clones are still alive.
  pub fn try_unwrap(self) -> Result<T, Self>
  where
    T: Sized, {
    Arc::try_unwrap(self.0).map_err(ArcShared)
  }
}

impl<T: ?Sized> core::ops::Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ArcShared").finish()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}
