//! Solver engine for tiled 3D wave function collapse.
//!
//! Narrows per-cell domains by face-matching propagation, collapses cells
//! by entropy-guided weighted selection, and recovers from contradictions
//! by clearing a region whose size grows with local temperature.
//!
//! - [`StandardRunner`]: the steppable state machine
//! - [`Generator`]: the host-facing lifecycle and query facade
//! - [`SolverConfig`]: run parameters with validation
//!
//! All randomness comes from one ChaCha8 generator seeded by
//! [`SolverConfig::seed`], so a run is reproducible from its inputs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod propagate;
pub mod recovery;
pub mod runner;
pub mod select;

pub use config::{ConfigError, SolverConfig};
pub use error::SolverError;
pub use generator::{CellSet, CellStatus, CellUnset, Generator, GeneratorStatus, TemperatureStats};
pub use metrics::SolverMetrics;
pub use propagate::{PropagationOutcome, Propagator};
pub use recovery::{RecoveryOutcome, TemperaturePolicy};
pub use runner::{RunState, StandardRunner};
