//! Probes for driving operators and observing subscribers in tests.

mod probe_subscription;
mod test_sink_probe;
mod test_source_probe;

pub use test_sink_probe::TestSinkProbe;
pub use test_source_probe::TestSourceProbe;
