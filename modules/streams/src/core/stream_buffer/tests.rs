use super::StreamBuffer;
use crate::core::{StreamBufferConfig, StreamError};

#[test]
fn buffer_rejects_when_full() {
  let mut buffer = StreamBuffer::new(StreamBufferConfig::new(1));
  assert!(buffer.offer(10_u32).is_ok());
  assert_eq!(buffer.offer(20_u32), Err(StreamError::BufferFull));
  assert_eq!(buffer.len(), 1);
}

#[test]
fn buffer_poll_empty_returns_error() {
  let mut buffer = StreamBuffer::<u32>::new(StreamBufferConfig::new(1));
  assert_eq!(buffer.poll(), Err(StreamError::BufferEmpty));
}

#[test]
fn buffer_is_fifo() {
  let mut buffer = StreamBuffer::new(StreamBufferConfig::default());
  for value in 0..5_u32 {
    buffer.offer(value).expect("capacity available");
  }
  let drained: Vec<u32> = core::iter::from_fn(|| buffer.poll().ok()).collect();
  assert_eq!(drained, vec![0, 1, 2, 3, 4]);
  assert!(buffer.is_empty());
}

#[test]
fn default_capacity_is_1024() {
  let buffer = StreamBuffer::<u8>::new(StreamBufferConfig::default());
  assert_eq!(buffer.capacity(), 1024);
  assert_eq!(StreamBufferConfig::new(0).capacity(), 1);
}
