//! Host-facing facade over a [`StandardRunner`].
//!
//! [`Generator`] adds a lifecycle (`Off → Running → Finished | Failed`,
//! with [`cancel()`](Generator::cancel) returning to `Off`) and the
//! coordinate-based query surface a host needs: per-cell status, progress
//! and temperature statistics. Bad input is logged and returned as an
//! error; it never changes solver state.

use tracing::{error, info};
use wfc3d_catalog::TileCatalog;
use wfc3d_core::{Direction, FacePrototypeId, TileId, Transform2D, Transform3D};
use wfc3d_grid::Coord;

use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::metrics::SolverMetrics;
use crate::runner::{RunState, StandardRunner};

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Generator>();
    }
};

// ── Status types ────────────────────────────────────────────────

/// Lifecycle of a [`Generator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorStatus {
    /// No run exists.
    #[default]
    Off,
    /// A run is in progress.
    Running,
    /// Every cell was set, or the run was stopped early.
    Finished,
    /// The unwinding budget ran out. The grid stays inspectable.
    Failed,
}

/// A set cell's contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    /// The chosen tile.
    pub tile_id: TileId,
    /// Its orientation.
    pub transform: Transform3D,
}

/// An unset cell's remaining choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellUnset {
    /// Options still legal.
    pub n_possibilities: usize,
}

/// Everything a host can learn about one cell.
///
/// Exactly one of `if_set` / `if_unset` is meaningful, selected by
/// `is_set`. The default value is the sentinel returned for invalid
/// queries: unset, zero temperature, zero possibilities.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellStatus {
    /// Current temperature.
    pub temperature: f32,
    /// Whether exactly one option remains.
    pub is_set: bool,
    /// Contents when set.
    pub if_set: CellSet,
    /// Remaining choice when unset.
    pub if_unset: CellUnset,
}

/// Temperature summary over the unsolved cells.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TemperatureStats {
    /// Coldest unsolved cell.
    pub min: f32,
    /// Hottest unsolved cell.
    pub max: f32,
    /// Mean over unsolved cells.
    pub mean: f32,
    /// Upper median over unsolved cells.
    pub median: f32,
}

// ── Generator ───────────────────────────────────────────────────

/// A resumable, steppable solver session.
///
/// # Example
///
/// ```ignore
/// let mut generator = Generator::new();
/// generator.start(&catalog, SolverConfig::default())?;
/// if generator.run_to_end(10_000) {
///     let cell = generator.cell([0, 0, 0]);
/// }
/// ```
#[derive(Default)]
pub struct Generator {
    status: GeneratorStatus,
    runner: Option<StandardRunner>,
}

impl Generator {
    /// A generator with no run.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Begin a new run, discarding any previous one.
    ///
    /// On an empty catalog or invalid configuration the error is logged
    /// and returned, and the generator stays [`GeneratorStatus::Off`].
    pub fn start(&mut self, catalog: &TileCatalog, config: SolverConfig) -> Result<(), SolverError> {
        self.cancel();
        let dims = config.dimensions;
        let seed = config.seed;
        match StandardRunner::new(catalog, config) {
            Ok(runner) => {
                info!(
                    ?dims,
                    seed,
                    options = runner.catalog().n_options(),
                    "wfc run started"
                );
                self.runner = Some(runner);
                self.status = GeneratorStatus::Running;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "cannot start wfc run; generator stays off");
                Err(e.into())
            }
        }
    }

    /// Advance one step. Fails with [`SolverError::NotRunning`] unless the
    /// status is [`GeneratorStatus::Running`].
    pub fn tick(&mut self) -> Result<GeneratorStatus, SolverError> {
        if self.status != GeneratorStatus::Running {
            return Err(SolverError::NotRunning);
        }
        let runner = self.runner.as_mut().ok_or(SolverError::NotRunning)?;
        let state = runner.tick();
        self.apply(state);
        Ok(self.status)
    }

    /// Tick until the run ends or `timeout_iterations` ticks have passed.
    /// Returns whether the run finished.
    pub fn run_to_end(&mut self, timeout_iterations: u32) -> bool {
        if self.status == GeneratorStatus::Running {
            if let Some(runner) = self.runner.as_mut() {
                runner.tick_n(timeout_iterations);
                let state = runner.state();
                self.apply(state);
            }
        }
        self.status == GeneratorStatus::Finished
    }

    fn apply(&mut self, state: RunState) {
        let next = match state {
            RunState::Running => GeneratorStatus::Running,
            RunState::Finished => GeneratorStatus::Finished,
            RunState::Failed => GeneratorStatus::Failed,
        };
        if next != self.status {
            let ticks = self.tick_count();
            match next {
                GeneratorStatus::Finished => info!(ticks, "wfc run finished"),
                GeneratorStatus::Failed => info!(ticks, "wfc run failed"),
                _ => {}
            }
        }
        self.status = next;
    }

    /// Drop the run and return to [`GeneratorStatus::Off`]. Idempotent.
    pub fn cancel(&mut self) {
        if self.runner.take().is_some() {
            info!("wfc run cancelled");
        }
        self.status = GeneratorStatus::Off;
    }

    /// End a running run as [`GeneratorStatus::Finished`], leaving unset
    /// cells unsolved. The grid stays queryable.
    pub fn stop(&mut self) {
        if self.status == GeneratorStatus::Running {
            info!(progress = self.progress(), "wfc run stopped early");
            self.status = GeneratorStatus::Finished;
        }
    }

    // ── Constraints ─────────────────────────────────────────────

    fn running_mut(&mut self, op: &str) -> Result<&mut StandardRunner, SolverError> {
        match (self.status, self.runner.as_mut()) {
            (GeneratorStatus::Running, Some(runner)) => Ok(runner),
            _ => {
                error!(op, "generator is not running");
                Err(SolverError::NotRunning)
            }
        }
    }

    /// Force a cell to a tile and orientation.
    pub fn set_cell(
        &mut self,
        pos: Coord,
        tile_id: TileId,
        transform: Transform3D,
        persistent: bool,
    ) -> Result<(), SolverError> {
        let runner = self.running_mut("set_cell")?;
        runner
            .set_cell(pos, tile_id, transform, persistent)
            .inspect_err(|e| error!(?pos, tile = %tile_id, error = %e, "set_cell rejected"))?;
        self.sync_status();
        Ok(())
    }

    /// Restrict one face of a cell to a prototype in a given orientation.
    pub fn set_face_constraint(
        &mut self,
        pos: Coord,
        dir: Direction,
        prototype_id: FacePrototypeId,
        orientation: Transform2D,
    ) -> Result<(), SolverError> {
        let runner = self.running_mut("set_face_constraint")?;
        runner
            .set_face_constraint(pos, dir, prototype_id, orientation)
            .inspect_err(|e| {
                error!(?pos, ?dir, prototype = %prototype_id, error = %e, "set_face_constraint rejected")
            })?;
        self.sync_status();
        Ok(())
    }

    /// An edit can finish the run or exhaust its budget.
    fn sync_status(&mut self) {
        if let Some(state) = self.runner.as_ref().map(StandardRunner::state) {
            self.apply(state);
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Status of the cell at `pos`. Out-of-range positions, or no run,
    /// give [`CellStatus::default()`] and log an error.
    pub fn cell(&self, pos: Coord) -> CellStatus {
        let Some(runner) = self.runner.as_ref() else {
            error!(?pos, "cell queried with no run");
            return CellStatus::default();
        };
        let shape = runner.grid().shape();
        if !shape.contains(pos) {
            error!(?pos, dims = ?shape.dims(), "cell query out of range");
            return CellStatus::default();
        }
        let Ok(index) = shape.index_of(pos) else {
            return CellStatus::default();
        };

        let temperature = runner.temperature(index);
        match runner.chosen(index) {
            Some((tile_id, transform)) => CellStatus {
                temperature,
                is_set: true,
                if_set: CellSet { tile_id, transform },
                if_unset: CellUnset::default(),
            },
            None => CellStatus {
                temperature,
                is_set: false,
                if_set: CellSet::default(),
                if_unset: CellUnset {
                    n_possibilities: runner.grid().cell(index).n_possibilities(),
                },
            },
        }
    }

    /// Fraction of cells set, in `[0, 1]`. Zero with no run.
    ///
    /// A run ended early by [`stop()`](Self::stop) is `Finished` but keeps
    /// its partial progress, so this can be below 1 for a finished run.
    pub fn progress(&self) -> f32 {
        self.runner.as_ref().map_or(0.0, StandardRunner::progress)
    }

    /// Min, max, mean and median temperature over unsolved cells; all zero
    /// when every cell is solved or there is no run.
    pub fn temperature_stats(&self) -> TemperatureStats {
        let Some(runner) = self.runner.as_ref() else {
            return TemperatureStats::default();
        };
        let mut temps: Vec<f32> = (0..runner.grid().len())
            .filter(|&i| !runner.grid().cell(i).is_set())
            .map(|i| runner.temperature(i))
            .collect();
        if temps.is_empty() {
            return TemperatureStats::default();
        }
        temps.sort_by(f32::total_cmp);
        let sum: f32 = temps.iter().sum();
        TemperatureStats {
            min: temps[0],
            max: temps[temps.len() - 1],
            mean: sum / temps.len() as f32,
            median: temps[temps.len() / 2],
        }
    }

    /// Ticks executed in the current run.
    pub fn tick_count(&self) -> u64 {
        self.runner.as_ref().map_or(0, StandardRunner::timestamp)
    }

    /// Number of `(tile, orientation)` options in the current run.
    pub fn n_tile_possibilities(&self) -> usize {
        self.runner.as_ref().map_or(0, |r| r.catalog().n_options())
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GeneratorStatus {
        self.status
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.status == GeneratorStatus::Running
    }

    /// Counters for the current run.
    pub fn metrics(&self) -> Option<&SolverMetrics> {
        self.runner.as_ref().map(StandardRunner::metrics)
    }

    /// The underlying runner, for inspection.
    pub fn runner(&self) -> Option<&StandardRunner> {
        self.runner.as_ref()
    }
}
