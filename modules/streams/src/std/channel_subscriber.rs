extern crate std;

use std::sync::mpsc::Sender;

use rivulet_utils_rs::core::sync::ArcShared;

use super::operator_signal::OperatorSignal;
use crate::core::{StreamError, Subscriber, SubscriberShared};

/// Forwards every signal into a channel read by an [`OperatorIter`](super::OperatorIter).
pub(crate) struct ChannelSubscriber<T> {
  sender: Sender<OperatorSignal<T>>,
}

impl<T> ChannelSubscriber<T>
where
  T: Send + 'static,
{
  pub(crate) const fn new(sender: Sender<OperatorSignal<T>>) -> Self {
    Self { sender }
  }

  pub(crate) fn into_shared(self) -> SubscriberShared<T> {
    ArcShared::new(self).into_dyn(|subscriber| subscriber as &dyn Subscriber<T>)
  }

  fn send(&self, signal: OperatorSignal<T>) {
    if self.sender.send(signal).is_err() {
      tracing::trace!("operator iterator dropped, discarding signal");
    }
  }
}

impl<T> Subscriber<T> for ChannelSubscriber<T>
where
  T: Send + 'static,
{
  fn on_next(&self, value: T) {
    self.send(OperatorSignal::Next(value));
  }

  fn on_error(&self, error: StreamError) {
    self.send(OperatorSignal::Error(error));
  }

  fn on_complete(&self) {
    self.send(OperatorSignal::Complete);
  }
}
