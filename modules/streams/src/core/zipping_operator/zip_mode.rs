/// How a zip subscription accounts for downstream demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ZipMode {
  /// Pairs are delivered only against requested demand.
  Demand,
  /// Matched pairs are flushed as soon as they exist.
  Eager,
}
