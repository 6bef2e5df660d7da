use crate::core::StreamError;

/// Subscriber signal carried across the iterator channel.
#[derive(Debug)]
pub(crate) enum OperatorSignal<T> {
  Next(T),
  Error(StreamError),
  Complete,
}
