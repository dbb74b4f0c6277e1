//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] carries every knob of a run. [`validate()`](SolverConfig::validate)
//! checks them up front so that a run never starts in a state it cannot
//! make sense of.

use std::error::Error;
use std::fmt;

use wfc3d_catalog::CatalogError;
use wfc3d_grid::{GridError, GridShape};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SolverConfig`] or preparing a run.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The tile catalog could not be unwrapped.
    Catalog(CatalogError),
    /// The grid shape is invalid.
    Grid(GridError),
    /// `clear_growth_rate` is NaN, infinite, or negative.
    InvalidGrowthRate {
        /// The invalid value.
        value: f32,
    },
    /// `fuzziness` is outside `[0, 1]`.
    InvalidFuzziness {
        /// The invalid value.
        value: f32,
    },
    /// `temperature_decay` is outside `[0, 1)`.
    InvalidDecay {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "catalog: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidGrowthRate { value } => {
                write!(f, "clear_growth_rate must be finite and non-negative, got {value}")
            }
            Self::InvalidFuzziness { value } => {
                write!(f, "fuzziness must be in [0, 1], got {value}")
            }
            Self::InvalidDecay { value } => {
                write!(f, "temperature_decay must be in [0, 1), got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Parameters of one solver run.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Grid size along X, Y, Z. Default: 8×8×8.
    pub dimensions: [u32; 3],
    /// Per-axis wrap. Default: all open.
    pub periodic: [bool; 3],
    /// Seed for the run's ChaCha8 generator.
    pub seed: u64,
    /// How fast the cleared radius grows with temperature. Default: 0.5.
    pub clear_growth_rate: f32,
    /// Randomness in cell selection, `0` = strictly fewest options first,
    /// `1` = nearly uniform. Default: 0.1.
    pub fuzziness: f32,
    /// Number of recoveries allowed before the run fails. `0` makes the
    /// first contradiction fatal. Default: 0.
    pub max_unwinding: u32,
    /// Fraction of temperature lost per tick. Default: 0 (no cooling).
    pub temperature_decay: f32,
    /// Whether two faces that both fell back to the null prototype are
    /// compatible. Default: false.
    pub null_faces_match: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dimensions: [8, 8, 8],
            periodic: [false; 3],
            seed: 1_234_567_890,
            clear_growth_rate: 0.5,
            fuzziness: 0.1,
            max_unwinding: 0,
            temperature_decay: 0.0,
            null_faces_match: false,
        }
    }
}

impl SolverConfig {
    /// Check every invariant. Does not touch the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = self.clear_growth_rate;
        if !g.is_finite() || g < 0.0 {
            return Err(ConfigError::InvalidGrowthRate { value: g });
        }
        let f = self.fuzziness;
        if !(0.0..=1.0).contains(&f) {
            return Err(ConfigError::InvalidFuzziness { value: f });
        }
        let d = self.temperature_decay;
        if !(0.0..1.0).contains(&d) {
            return Err(ConfigError::InvalidDecay { value: d });
        }
        self.shape()?;
        Ok(())
    }

    /// The grid shape these dimensions describe.
    pub fn shape(&self) -> Result<GridShape, ConfigError> {
        Ok(GridShape::new(self.dimensions, self.periodic)?)
    }
}
