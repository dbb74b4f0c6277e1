//! The steppable solver state machine.
//!
//! [`StandardRunner`] owns everything one run needs: the unwrapped
//! catalog, the domain grid, the propagation queue, the PRNG and the
//! counters. Each [`tick()`](StandardRunner::tick) either recovers from a
//! pending contradiction or performs one select/commit/propagate cycle.
//!
//! # Ownership model
//!
//! `StandardRunner` is [`Send`] but all mutation takes `&mut self`; there is
//! no internal synchronization and no background work.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};
use wfc3d_catalog::{CatalogError, FaceIdentifiers, TileCatalog, UnwrappedCatalog};
use wfc3d_core::{Direction, FacePrototypeId, TileId, Transform2D, Transform3D};
use wfc3d_grid::{Coord, DomainGrid, OptionSet};

use crate::config::{ConfigError, SolverConfig};
use crate::error::SolverError;
use crate::metrics::SolverMetrics;
use crate::propagate::{PropagationOutcome, Propagator};
use crate::recovery::{RecoveryOutcome, TemperaturePolicy};
use crate::select::{choose_option, select_cell};

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<StandardRunner>();
    }
};

/// Where a run stands after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// More ticks are needed.
    Running,
    /// Every cell is set.
    Finished,
    /// The unwinding budget ran out.
    Failed,
}

/// Solver state for one run.
pub struct StandardRunner {
    catalog: UnwrappedCatalog,
    grid: DomainGrid,
    propagator: Propagator,
    policy: TemperaturePolicy,
    rng: ChaCha8Rng,
    config: SolverConfig,
    timestamp: u64,
    unwinding_count: u32,
    pending: Option<usize>,
    failed: bool,
    metrics: SolverMetrics,
}

impl StandardRunner {
    /// Validate `config`, unwrap `catalog` and set up a fresh grid.
    pub fn new(catalog: &TileCatalog, config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let unwrapped = catalog.unwrap()?;
        Self::with_unwrapped(unwrapped, config)
    }

    /// Like [`new()`](Self::new) but reusing an already unwrapped catalog.
    ///
    /// Every cell starts with every option, then one propagation pass
    /// removes options that can never fit next to anything. A contradiction
    /// found there is left pending for the first tick.
    pub fn with_unwrapped(
        mut catalog: UnwrappedCatalog,
        config: SolverConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.shape()?;
        catalog.set_null_faces_match(config.null_faces_match);

        let grid = DomainGrid::new(shape, catalog.n_options());
        let propagator = Propagator::new(&catalog, grid.len());
        let mut runner = Self {
            policy: TemperaturePolicy::from_config(&config),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            catalog,
            grid,
            propagator,
            config,
            timestamp: 0,
            unwinding_count: 0,
            pending: None,
            failed: false,
            metrics: SolverMetrics::default(),
        };
        for i in 0..runner.grid.len() {
            runner.propagator.enqueue(i);
        }
        runner.propagate();
        Ok(runner)
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance the run by one step.
    pub fn tick(&mut self) -> RunState {
        let state = self.state();
        if state != RunState::Running {
            return state;
        }
        self.timestamp += 1;
        self.metrics.ticks += 1;

        if let Some(cell) = self.pending.take() {
            self.recover(cell);
            return self.state();
        }

        let Some(cell) = select_cell(&self.grid, self.config.fuzziness, &mut self.rng) else {
            return self.state();
        };
        let Some(option) = choose_option(&self.grid.cell(cell).domain, &self.catalog, &mut self.rng)
        else {
            self.pending = Some(cell);
            return self.state();
        };

        let n_options = self.grid.n_options();
        self.grid.cell_mut(cell).domain = OptionSet::singleton(n_options, option);
        self.metrics.collapses += 1;
        self.propagator.enqueue(cell);
        self.propagate();
        self.state()
    }

    /// Tick up to `max_ticks` times. Returns whether the run finished.
    pub fn tick_n(&mut self, max_ticks: u32) -> bool {
        for _ in 0..max_ticks {
            if self.tick() != RunState::Running {
                break;
            }
        }
        self.is_finished()
    }

    fn propagate(&mut self) {
        let outcome = self
            .propagator
            .propagate(&mut self.grid, &self.catalog, &mut self.metrics);
        if let PropagationOutcome::Contradiction { cell } = outcome {
            self.on_contradiction(cell);
        }
    }

    fn on_contradiction(&mut self, cell: usize) {
        self.metrics.contradictions += 1;
        debug!(cell, tick = self.timestamp, "contradiction");
        self.pending = Some(cell);
        if self.timestamp > 0 && !self.policy.can_unwind(self.unwinding_count) {
            self.fail(cell);
        }
    }

    fn recover(&mut self, cell: usize) {
        let outcome = self.policy.recover(
            cell,
            self.timestamp,
            &mut self.unwinding_count,
            &mut self.grid,
            &self.catalog,
            &mut self.propagator,
            &mut self.metrics,
        );
        match outcome {
            RecoveryOutcome::Recovered => {}
            RecoveryOutcome::Contradiction { cell } => self.on_contradiction(cell),
            RecoveryOutcome::Exhausted => self.fail(cell),
        }
    }

    fn fail(&mut self, cell: usize) {
        if !self.failed {
            warn!(
                cell,
                unwinding = self.unwinding_count,
                tick = self.timestamp,
                "contradiction with no unwinding budget left"
            );
        }
        self.failed = true;
        self.pending = Some(cell);
        self.propagator.clear();
    }

    // ── External constraints ───────────────────────────────────────

    /// Force the cell at `pos` to `tile` in orientation `transform`.
    ///
    /// An ordinary pin is a choice like any other and recovery may clear
    /// it. A `persistent` pin becomes the cell's base domain, so recovery
    /// always restores it. A failed run rejects edits with
    /// [`SolverError::NotRunning`].
    pub fn set_cell(
        &mut self,
        pos: Coord,
        tile: TileId,
        transform: Transform3D,
        persistent: bool,
    ) -> Result<(), SolverError> {
        self.ensure_live()?;
        let index = self.grid.shape().index_of(pos)?;
        let tile_index = self
            .catalog
            .tile_index_of(tile)
            .ok_or(CatalogError::UnknownTile { id: tile })?;
        let option = self
            .catalog
            .option_index(tile_index, transform)
            .ok_or(SolverError::UnsupportedTransform { tile, transform })?;

        self.grid.pin_cell(index, option, persistent);
        self.propagator.enqueue(index);
        self.propagate();
        Ok(())
    }

    /// Restrict the cell at `pos` to options whose face on side `dir` is
    /// prototype `prototype` placed with `orientation`.
    pub fn set_face_constraint(
        &mut self,
        pos: Coord,
        dir: Direction,
        prototype: FacePrototypeId,
        orientation: Transform2D,
    ) -> Result<(), SolverError> {
        self.ensure_live()?;
        self.grid.shape().index_of(pos)?;
        let face = self
            .catalog
            .face_identifiers_for(prototype, dir, orientation)
            .ok_or(CatalogError::UnknownFacePrototype { id: prototype })?;
        self.set_face_identifiers(pos, dir, &face)
    }

    /// Restrict the cell at `pos` to options whose face on side `dir`
    /// carries exactly `face`.
    pub fn set_face_identifiers(
        &mut self,
        pos: Coord,
        dir: Direction,
        face: &FaceIdentifiers,
    ) -> Result<(), SolverError> {
        self.ensure_live()?;
        let index = self.grid.shape().index_of(pos)?;
        let key = self.catalog.face_key(face);
        let options = self.catalog.options();
        let mut allowed = OptionSet::full(options.len());
        allowed.retain(|o| Some(options[o].face(dir)) == key);
        if self.grid.constrain_cell(index, &allowed) {
            self.propagator.enqueue(index);
            self.propagate();
        }
        Ok(())
    }

    /// A failed run takes no further edits.
    fn ensure_live(&self) -> Result<(), SolverError> {
        if self.failed {
            Err(SolverError::NotRunning)
        } else {
            Ok(())
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Current state without advancing.
    pub fn state(&self) -> RunState {
        if self.failed {
            RunState::Failed
        } else if self.is_finished() {
            RunState::Finished
        } else {
            RunState::Running
        }
    }

    /// Whether every cell is set and nothing is pending.
    pub fn is_finished(&self) -> bool {
        !self.failed && self.pending.is_none() && self.grid.count_set() == self.grid.len()
    }

    /// Whether the unwinding budget ran out.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Fraction of cells that are set.
    pub fn progress(&self) -> f32 {
        self.grid.count_set() as f32 / self.grid.len() as f32
    }

    /// Temperature of a cell at the current tick.
    pub fn temperature(&self, index: usize) -> f32 {
        self.grid
            .cell(index)
            .temperature_at(self.timestamp, self.config.temperature_decay)
    }

    /// Tile and orientation of a set cell.
    pub fn chosen(&self, index: usize) -> Option<(TileId, Transform3D)> {
        let option = self.catalog.options()[self.grid.cell(index).chosen()?];
        Some((self.catalog.tile_id(option.tile_index), option.transform))
    }

    /// The domain grid.
    pub fn grid(&self) -> &DomainGrid {
        &self.grid
    }

    /// The unwrapped catalog.
    pub fn catalog(&self) -> &UnwrappedCatalog {
        &self.catalog
    }

    /// The run configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Ticks executed so far.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Recoveries spent so far.
    pub fn unwinding_count(&self) -> u32 {
        self.unwinding_count
    }

    /// The cell awaiting recovery, if any.
    pub fn pending_contradiction(&self) -> Option<usize> {
        self.pending
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &SolverMetrics {
        &self.metrics
    }
}
