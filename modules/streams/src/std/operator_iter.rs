extern crate std;

#[cfg(test)]
mod tests;

use std::sync::mpsc::{self, Receiver};

use super::{channel_subscriber::ChannelSubscriber, operator_signal::OperatorSignal};
use crate::core::{Demand, Operator, StreamError, SubscriptionShared};

/// Blocking iterator over an operator.
///
/// Demand is requested in batches: the next batch is asked for only after every element of the
/// previous one was taken, so at most one batch of elements waits in the channel. Errors are
/// yielded as `Err` items and do not end iteration; completion does. If the producer lets go of
/// the subscriber without completing, one `Err(StreamError::Cancelled)` is yielded before the
/// end. Dropping the iterator cancels the subscription.
pub struct OperatorIter<T> {
  receiver:     Receiver<OperatorSignal<T>>,
  subscription: SubscriptionShared,
  batch:        u64,
  received:     u64,
  done:         bool,
}

impl<T> OperatorIter<T>
where
  T: Send + 'static,
{
  /// Batch size used by [`OperatorIter::new`].
  pub const DEFAULT_BATCH: u64 = 64;

  /// Subscribes to `operator` with the default batch size.
  #[must_use]
  pub fn new<O>(operator: &O) -> Self
  where
    O: Operator<T> + ?Sized, {
    Self::with_batch(operator, Self::DEFAULT_BATCH)
  }

  /// Subscribes to `operator`, requesting `batch` elements at a time. Zero is raised to one.
  #[must_use]
  pub fn with_batch<O>(operator: &O, batch: u64) -> Self
  where
    O: Operator<T> + ?Sized, {
    let batch = batch.max(1);
    let (sender, receiver) = mpsc::channel();
    let subscription = operator.subscribe(ChannelSubscriber::new(sender).into_shared());
    subscription.request(Demand::Finite(batch));
    Self { receiver, subscription, batch, received: 0, done: false }
  }

  /// Returns the batch size.
  #[must_use]
  pub const fn batch(&self) -> u64 {
    self.batch
  }
}

impl<T> Iterator for OperatorIter<T> {
  type Item = Result<T, StreamError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if self.received == self.batch {
      self.received = 0;
      self.subscription.request(Demand::Finite(self.batch));
    }
    match self.receiver.recv() {
      | Ok(OperatorSignal::Next(value)) => {
        self.received += 1;
        Some(Ok(value))
      },
      | Ok(OperatorSignal::Error(error)) => Some(Err(error)),
      | Ok(OperatorSignal::Complete) => {
        self.done = true;
        None
      },
      | Err(_) => {
        self.done = true;
        Some(Err(StreamError::Cancelled))
      },
    }
  }
}

impl<T> Drop for OperatorIter<T> {
  fn drop(&mut self) {
    self.subscription.cancel();
  }
}
