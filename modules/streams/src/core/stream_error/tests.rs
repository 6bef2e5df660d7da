use super::StreamError;

#[test]
fn error_messages_are_stable() {
  assert_eq!(StreamError::InvalidDemand.to_string(), "request count must be positive");
  assert_eq!(StreamError::BufferFull.to_string(), "buffer is full");
  assert_eq!(StreamError::Cancelled.to_string(), "subscription is cancelled");
  assert_eq!(StreamError::failed("boom").to_string(), "stream element failed: boom");
}
