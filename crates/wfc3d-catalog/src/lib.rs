//! Tile catalog model for the wfc3d solver.
//!
//! A [`TileCatalog`] is what the host hands to the solver: a keyed set of
//! [`FacePrototype`]s and a keyed set of [`Tile`]s whose six faces reference
//! those prototypes. Before a run the catalog is [unwrapped](TileCatalog::unwrap)
//! into an [`UnwrappedCatalog`], which assigns concrete [`PointId`] blocks,
//! enumerates every legal `(tile, orientation)` option, and interns each
//! option's world-frame faces into dense [`FaceKey`]s.
//!
//! [`PointId`]: wfc3d_core::PointId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod face;
pub mod prototype;
pub mod tile;
pub mod unwrapped;

pub use catalog::TileCatalog;
pub use error::CatalogError;
pub use face::FaceIdentifiers;
pub use prototype::{FacePrototype, PointSymmetry};
pub use tile::{ImplicitTransformSet, Tile, TileFace};
pub use unwrapped::{FaceKey, TileOption, UnwrappedCatalog};
