//! Cumulative counters for a solver run.

/// Counters accumulated over the lifetime of one run.
///
/// The runner updates these as it goes; the generator exposes the
/// current values for telemetry and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverMetrics {
    /// Ticks executed.
    pub ticks: u64,
    /// Cells collapsed by selection.
    pub collapses: u64,
    /// Contradictions detected.
    pub contradictions: u64,
    /// Recovery events (each one counts against the unwinding budget).
    pub recoveries: u64,
    /// Cells whose domain was reset by recovery.
    pub cells_cleared: u64,
    /// Cells popped from the propagation queue.
    pub propagation_visits: u64,
}
