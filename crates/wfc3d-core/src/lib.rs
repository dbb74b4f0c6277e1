//! Cube geometry and core identifiers for the wfc3d solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces every other wfc3d crate builds on:
//!
//! - [`Direction`]: the six faces of a cube cell
//! - [`FacePoint`]: the four corners / four edges of one face
//! - [`Transform2D`]: the eight symmetries of a square face
//! - [`Rotation3D`] and [`Transform3D`]: the 48-element orientation group
//!   of the cube (24 rotations, optionally composed with inversion)
//! - [`TransformSet`]: a bitset over the orientation group
//! - strongly-typed ids ([`PointId`], [`TileId`], [`FacePrototypeId`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod face_point;
pub mod id;
pub mod rotation;
pub mod transform2d;
pub mod transform3d;

pub(crate) mod matrix;

pub use direction::Direction;
pub use error::GeometryError;
pub use face_point::FacePoint;
pub use id::{FacePrototypeId, PointId, TileId};
pub use rotation::Rotation3D;
pub use transform2d::Transform2D;
pub use transform3d::{Transform3D, TransformSet};
