//! Error types for grid construction and addressing.

use std::fmt;

use crate::shape::Coord;

/// Errors arising from grid construction or coordinate lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// At least one axis has length zero.
    EmptyGrid,
    /// The total cell count does not fit in a `u32`.
    DimensionTooLarge {
        /// The requested dimensions.
        dims: [u32; 3],
    },
    /// A coordinate is outside a non-periodic axis.
    CoordOutOfBounds {
        /// The offending coordinate.
        pos: Coord,
        /// The grid dimensions.
        dims: [u32; 3],
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell on every axis"),
            Self::DimensionTooLarge { dims } => {
                write!(f, "grid {}x{}x{} has too many cells", dims[0], dims[1], dims[2])
            }
            Self::CoordOutOfBounds { pos, dims } => write!(
                f,
                "coordinate ({}, {}, {}) out of bounds for grid {}x{}x{}",
                pos[0], pos[1], pos[2], dims[0], dims[1], dims[2]
            ),
        }
    }
}

impl std::error::Error for GridError {}
