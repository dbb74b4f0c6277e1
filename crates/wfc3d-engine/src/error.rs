//! Errors returned by the runner and generator.

use std::error::Error;
use std::fmt;

use wfc3d_catalog::CatalogError;
use wfc3d_core::{TileId, Transform3D};
use wfc3d_grid::GridError;

use crate::config::ConfigError;

/// Errors from driving or editing a solver run.
#[derive(Clone, Debug, PartialEq)]
pub enum SolverError {
    /// The operation needs a running solver.
    NotRunning,
    /// A run could not be started.
    Config(ConfigError),
    /// A tile or face prototype lookup failed.
    Catalog(CatalogError),
    /// A coordinate is outside the grid.
    Grid(GridError),
    /// The tile does not support the requested orientation.
    UnsupportedTransform {
        /// The tile.
        tile: TileId,
        /// The orientation it does not support.
        transform: Transform3D,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRunning => write!(f, "solver is not running"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Catalog(e) => write!(f, "catalog: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::UnsupportedTransform { tile, transform } => {
                write!(f, "tile {tile} does not support orientation {transform}")
            }
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SolverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<CatalogError> for SolverError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<GridError> for SolverError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
