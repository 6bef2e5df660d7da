use std::{sync::Barrier, thread};

use super::SpinSyncMutex;
use crate::core::sync::ArcShared;

#[test]
fn lock_gives_mutable_access() {
  let mutex = SpinSyncMutex::new(vec![1_u32]);
  mutex.lock().push(2);
  assert_eq!(mutex.into_inner(), vec![1, 2]);
}

#[test]
fn concurrent_increments_are_not_lost() {
  const THREADS: usize = 4;
  const ITERATIONS: usize = 1_000;

  let counter = ArcShared::new(SpinSyncMutex::new(0_usize));
  let barrier = ArcShared::new(Barrier::new(THREADS));
  let handles: Vec<_> = (0..THREADS)
    .map(|_| {
      let counter = counter.clone();
      let barrier = barrier.clone();
      thread::spawn(move || {
        barrier.wait();
        for _ in 0..ITERATIONS {
          *counter.lock() += 1;
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().expect("worker panicked");
  }
  assert_eq!(*counter.lock(), THREADS * ITERATIONS);
}
