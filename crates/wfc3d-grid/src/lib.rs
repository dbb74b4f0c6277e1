//! Grid and domain model for the wfc3d solver.
//!
//! - [`GridShape`]: dimensions, per-axis periodicity, index/coordinate
//!   mapping, neighbours and wrap-aware regions
//! - [`OptionSet`]: fixed-capacity bitset of option indices
//! - [`Cell`]: one position's domain, base domain, temperature and pin flag
//! - [`DomainGrid`]: the flat cell array

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod domain;
pub mod error;
pub mod option_set;
pub mod shape;

pub use cell::Cell;
pub use domain::DomainGrid;
pub use error::GridError;
pub use option_set::OptionSet;
pub use shape::{Coord, GridShape};
