use rivulet_utils_rs::core::sync::ArcShared;

use super::{side::Side, zip_state::ZipState};
use crate::core::{stream_error::StreamError, subscriber::Subscriber};

/// Feeds the right upstream into a zip subscription.
pub(super) struct RightSubscriber<L, R, O> {
  state: ArcShared<ZipState<L, R, O>>,
}

impl<L, R, O> RightSubscriber<L, R, O> {
  pub(super) const fn new(state: ArcShared<ZipState<L, R, O>>) -> Self {
    Self { state }
  }
}

impl<L, R, O> Subscriber<R> for RightSubscriber<L, R, O>
where
  L: Send,
  R: Send,
  O: Send,
{
  fn on_next(&self, value: R) {
    self.state.on_right(value);
  }

  fn on_error(&self, error: StreamError) {
    self.state.side_error(Side::Right, error);
  }

  fn on_complete(&self) {
    self.state.side_complete(Side::Right);
  }
}
