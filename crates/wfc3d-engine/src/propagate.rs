//! Arc-consistency propagation over the domain grid.
//!
//! Two touching cells are consistent when every option on either side has
//! at least one option on the other side whose facing face matches. The
//! [`Propagator`] restores this after domains shrink, working through a
//! FIFO queue of cells whose domains changed.

use std::collections::VecDeque;

use wfc3d_catalog::UnwrappedCatalog;
use wfc3d_core::Direction;
use wfc3d_grid::{DomainGrid, OptionSet};

use crate::metrics::SolverMetrics;

/// How a propagation pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// The queue drained and every domain is non-empty.
    Consistent,
    /// A domain emptied. Unprocessed cells stay queued.
    Contradiction {
        /// The cell whose domain is empty.
        cell: usize,
    },
}

/// Propagation queue plus the per-face support tables it reads.
///
/// `supports[d][k]` holds every option whose face on side `d` has key `k`
/// and can match at all under the catalog's null-face policy.
#[derive(Clone, Debug)]
pub struct Propagator {
    supports: Vec<Vec<OptionSet>>,
    queue: VecDeque<usize>,
    queued: Vec<bool>,
    seen_keys: Vec<bool>,
    touched_keys: Vec<usize>,
    allowed: OptionSet,
}

impl Propagator {
    /// Build support tables for `catalog` and an empty queue sized for
    /// `cell_count` cells.
    pub fn new(catalog: &UnwrappedCatalog, cell_count: usize) -> Self {
        let n_options = catalog.n_options();
        let n_keys = catalog.n_face_keys();
        let mut supports = vec![vec![OptionSet::empty(n_options); n_keys]; Direction::COUNT];
        for (o, option) in catalog.options().iter().enumerate() {
            for dir in Direction::ALL {
                let key = option.face(dir);
                if catalog.faces_match(key, key) {
                    supports[dir.index()][key.index()].insert(o);
                }
            }
        }
        Self {
            supports,
            queue: VecDeque::new(),
            queued: vec![false; cell_count],
            seen_keys: vec![false; n_keys],
            touched_keys: Vec::new(),
            allowed: OptionSet::empty(n_options),
        }
    }

    /// Queue a cell whose domain changed. Already-queued cells are skipped.
    pub fn enqueue(&mut self, cell: usize) {
        if !self.queued[cell] {
            self.queued[cell] = true;
            self.queue.push_back(cell);
        }
    }

    /// Number of queued cells.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued cell.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queued.fill(false);
    }

    /// Options a neighbour across side `dir` may keep, given `domain` on
    /// this side. Written into the internal scratch set.
    fn collect_allowed(&mut self, catalog: &UnwrappedCatalog, domain: &OptionSet, dir: Direction) {
        let facing = dir.opposite().index();
        self.allowed.clear();
        for o in domain {
            let key = catalog.options()[o].face(dir).index();
            if !self.seen_keys[key] {
                self.seen_keys[key] = true;
                self.touched_keys.push(key);
                self.allowed.union_with(&self.supports[facing][key]);
            }
        }
        for key in self.touched_keys.drain(..) {
            self.seen_keys[key] = false;
        }
    }

    /// Every option a cell may hold when the cell across its side `dir`
    /// has domain `neighbour`.
    pub fn supported(
        &mut self,
        catalog: &UnwrappedCatalog,
        neighbour: &OptionSet,
        dir: Direction,
    ) -> OptionSet {
        self.collect_allowed(catalog, neighbour, dir.opposite());
        self.allowed.clone()
    }

    /// Drain the queue, narrowing neighbours until nothing changes or a
    /// domain empties.
    pub fn propagate(
        &mut self,
        grid: &mut DomainGrid,
        catalog: &UnwrappedCatalog,
        metrics: &mut SolverMetrics,
    ) -> PropagationOutcome {
        while let Some(cell) = self.queue.pop_front() {
            self.queued[cell] = false;
            metrics.propagation_visits += 1;

            if grid.cell(cell).is_contradiction() {
                return PropagationOutcome::Contradiction { cell };
            }

            let neighbours = grid.shape().neighbours(cell);
            let domain = grid.cell(cell).domain.clone();
            for (dir, next) in neighbours {
                self.collect_allowed(catalog, &domain, dir);
                if !grid.cell_mut(next).domain.intersect_with(&self.allowed) {
                    continue;
                }
                if grid.cell(next).is_contradiction() {
                    // The rest of this cell's faces were not visited yet.
                    self.queued[cell] = true;
                    self.queue.push_front(cell);
                    return PropagationOutcome::Contradiction { cell: next };
                }
                self.enqueue(next);
            }
        }
        PropagationOutcome::Consistent
    }
}
