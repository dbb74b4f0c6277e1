//! Test utilities for wfc3d development.
//!
//! Provides small tile catalogs with known solution structure
//! ([`fixtures`]) and checkers for the solver's domain invariants
//! ([`arc_violation`], [`assert_arc_consistent`], [`assert_shrunk`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use wfc3d_catalog::UnwrappedCatalog;
use wfc3d_core::Direction;
use wfc3d_grid::{DomainGrid, OptionSet};

/// An option with no compatible option in one neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcViolation {
    pub cell: usize,
    pub option: usize,
    pub dir: Direction,
    pub neighbour: usize,
}

/// First option in the grid lacking support across some face, if any.
pub fn arc_violation(grid: &DomainGrid, catalog: &UnwrappedCatalog) -> Option<ArcViolation> {
    let options = catalog.options();
    for cell in 0..grid.len() {
        for (dir, neighbour) in grid.shape().neighbours(cell) {
            let theirs = &grid.cell(neighbour).domain;
            for option in grid.cell(cell).domain.iter() {
                let face = options[option].face(dir);
                let supported = theirs
                    .iter()
                    .any(|o| catalog.faces_match(face, options[o].face(dir.opposite())));
                if !supported {
                    return Some(ArcViolation {
                        cell,
                        option,
                        dir,
                        neighbour,
                    });
                }
            }
        }
    }
    None
}

/// Panics unless every option of every cell has support in every neighbour.
pub fn assert_arc_consistent(grid: &DomainGrid, catalog: &UnwrappedCatalog) {
    if let Some(v) = arc_violation(grid, catalog) {
        panic!("arc consistency violated: {v:?}");
    }
}

/// Snapshot of every domain.
pub fn domains(grid: &DomainGrid) -> Vec<OptionSet> {
    grid.cells().iter().map(|c| c.domain.clone()).collect()
}

/// Panics unless every domain in `after` is a subset of the matching one
/// in `before`.
pub fn assert_shrunk(before: &[OptionSet], after: &DomainGrid) {
    assert_eq!(before.len(), after.len(), "grid size changed");
    for (i, old) in before.iter().enumerate() {
        assert!(
            after.cell(i).domain.is_subset(old),
            "domain of cell {i} grew outside recovery"
        );
    }
}
