//! Contradiction recovery by local clearing.
//!
//! Each contradiction heats the cells around it. The hotter the failing
//! cell, the wider the region that gets reset to its base domains before
//! propagation runs again, so repeated failures in one place escalate from
//! small local repairs to larger rebuilds. Every recovery spends one unit
//! of the unwinding budget.

use tracing::debug;
use wfc3d_catalog::UnwrappedCatalog;
use wfc3d_grid::DomainGrid;

use crate::config::SolverConfig;
use crate::metrics::SolverMetrics;
use crate::propagate::{PropagationOutcome, Propagator};

/// How a recovery attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// The cleared region re-propagated without contradiction.
    Recovered,
    /// Re-propagation hit a new contradiction, to be handled next tick.
    Contradiction {
        /// The cell whose domain is empty.
        cell: usize,
    },
    /// The unwinding budget is spent; the run must fail.
    Exhausted,
}

/// The temperature-driven clearing policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperaturePolicy {
    /// Radius growth per unit of temperature.
    pub clear_growth_rate: f32,
    /// Recoveries allowed per run.
    pub max_unwinding: u32,
    /// Fraction of temperature lost per tick.
    pub temperature_decay: f32,
}

impl TemperaturePolicy {
    /// Extract the policy from a run configuration.
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            clear_growth_rate: config.clear_growth_rate,
            max_unwinding: config.max_unwinding,
            temperature_decay: config.temperature_decay,
        }
    }

    /// Whether another recovery fits in the budget.
    pub fn can_unwind(&self, unwinding_count: u32) -> bool {
        unwinding_count < self.max_unwinding
    }

    /// Clearing radius for a cell at `temperature`, capped at `largest_dim`.
    pub fn clear_radius(&self, temperature: f32, largest_dim: u32) -> u32 {
        let grown = (self.clear_growth_rate * temperature).floor();
        let grown = if grown.is_finite() && grown > 0.0 {
            grown.min(u32::MAX as f32) as u32
        } else {
            0
        };
        grown.saturating_add(1).min(largest_dim.max(1))
    }

    /// Recover from a contradiction at `cell` at tick `now`.
    ///
    /// Heats every cell within the clearing radius by `1 / (1 + distance)`,
    /// resets the non-persistent ones to their base domains, then
    /// re-propagates the region, its outer shell, and whatever was still
    /// queued.
    #[allow(clippy::too_many_arguments)]
    pub fn recover(
        &self,
        cell: usize,
        now: u64,
        unwinding_count: &mut u32,
        grid: &mut DomainGrid,
        catalog: &UnwrappedCatalog,
        propagator: &mut Propagator,
        metrics: &mut SolverMetrics,
    ) -> RecoveryOutcome {
        if !self.can_unwind(*unwinding_count) {
            return RecoveryOutcome::Exhausted;
        }
        *unwinding_count += 1;
        metrics.recoveries += 1;

        let shape = *grid.shape();
        let temperature = grid.cell(cell).temperature_at(now, self.temperature_decay) + 1.0;
        let radius = self.clear_radius(temperature, shape.largest_dim());

        let region = shape.region(cell, radius);
        let mut cleared = 0u64;
        for &i in &region {
            let dist = shape.distance(cell, i);
            grid.cell_mut(i)
                .heat(1.0 / (1.0 + dist as f32), now, self.temperature_decay);
            if grid.reset_cell(i) {
                cleared += 1;
            }
            propagator.enqueue(i);
        }
        for i in shape.region(cell, radius + 1) {
            if region.binary_search(&i).is_err() {
                propagator.enqueue(i);
            }
        }
        metrics.cells_cleared += cleared;

        debug!(
            cell,
            temperature,
            radius,
            cleared,
            unwinding = *unwinding_count,
            "cleared region around contradiction"
        );

        match propagator.propagate(grid, catalog, metrics) {
            PropagationOutcome::Consistent => RecoveryOutcome::Recovered,
            PropagationOutcome::Contradiction { cell } => RecoveryOutcome::Contradiction { cell },
        }
    }
}
