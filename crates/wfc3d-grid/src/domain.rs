//! The flat cell array.

use crate::cell::Cell;
use crate::option_set::OptionSet;
use crate::shape::GridShape;

/// Every cell of a grid, stored flat in [`GridShape`] index order.
#[derive(Clone, Debug)]
pub struct DomainGrid {
    shape: GridShape,
    n_options: usize,
    cells: Vec<Cell>,
}

impl DomainGrid {
    /// A grid where every cell may hold any of `n_options`.
    pub fn new(shape: GridShape, n_options: usize) -> Self {
        Self {
            shape,
            n_options,
            cells: vec![Cell::new(n_options); shape.cell_count()],
        }
    }

    /// The grid shape.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Capacity of every domain.
    pub fn n_options(&self) -> usize {
        self.n_options
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a flat index.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Mutable cell at a flat index.
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Restore a cell's domain to its base domain. A persistent cell's base
    /// is its pin, so resetting it can only re-assert that pin.
    /// Returns whether the domain changed.
    pub fn reset_cell(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        if cell.domain == cell.base_domain {
            return false;
        }
        cell.domain.clone_from(&cell.base_domain);
        true
    }

    /// Force a cell to a single option. A `persistent` pin also becomes the
    /// base domain, so no reset can undo it; an ordinary pin is lost the
    /// next time the cell is reset.
    pub fn pin_cell(&mut self, index: usize, option: usize, persistent: bool) {
        let cell = &mut self.cells[index];
        cell.domain = OptionSet::singleton(self.n_options, option);
        if persistent {
            cell.base_domain = cell.domain.clone();
            cell.persistent = true;
        }
    }

    /// Narrow both the domain and base domain of a cell to `allowed`.
    /// Returns whether the live domain changed.
    pub fn constrain_cell(&mut self, index: usize, allowed: &OptionSet) -> bool {
        let cell = &mut self.cells[index];
        cell.base_domain.intersect_with(allowed);
        cell.domain.intersect_with(allowed)
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|c| c.is_set()).count()
    }

    /// Domain size of every cell, in index order.
    pub fn domain_sizes(&self) -> Vec<usize> {
        self.cells.iter().map(Cell::n_possibilities).collect()
    }
}
