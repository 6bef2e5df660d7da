#[allow(clippy::disallowed_types)]
mod arc_shared;
mod spin_sync_mutex;

pub use arc_shared::ArcShared;
pub use spin_sync_mutex::SpinSyncMutex;
