//! wfc3d: tiled three-dimensional wave function collapse.
//!
//! This is the facade crate that re-exports the public API of the wfc3d
//! sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use wfc3d::prelude::*;
//!
//! // Two kinds of face; blocks of one colour only touch their own colour.
//! let mut catalog = TileCatalog::new();
//! catalog.add_face_prototype(FacePrototypeId(1), FacePrototype::uniform("red")).unwrap();
//! catalog.add_face_prototype(FacePrototypeId(2), FacePrototype::uniform("blue")).unwrap();
//! catalog.add_tile(TileId(1), Tile::uniform(FacePrototypeId(1)));
//! catalog.add_tile(TileId(2), Tile::uniform(FacePrototypeId(2)));
//!
//! let config = SolverConfig {
//!     dimensions: [4, 4, 4],
//!     seed: 42,
//!     ..SolverConfig::default()
//! };
//! let mut generator = Generator::new();
//! generator.start(&catalog, config).unwrap();
//! assert!(generator.run_to_end(100));
//!
//! let corner = generator.cell([0, 0, 0]);
//! let far = generator.cell([3, 3, 3]);
//! assert!(corner.is_set);
//! assert_eq!(corner.if_set.tile_id, far.if_set.tile_id);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geometry`] | `wfc3d-core` | Directions, face points, 2D and 3D orientations, ids |
//! | [`catalog`] | `wfc3d-catalog` | Face prototypes, tiles, catalog unwrapping |
//! | [`grid`] | `wfc3d-grid` | Grid shape, option sets, cells |
//! | [`engine`] | `wfc3d-engine` | Propagation, recovery, runner and generator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Orientation algebra and identifiers (`wfc3d-core`).
///
/// [`geometry::Transform3D`] is the 48-element orientation group;
/// [`geometry::Transform2D`] the 8 symmetries of a face.
pub use wfc3d_core as geometry;

/// Tile catalog model (`wfc3d-catalog`).
///
/// Build a [`catalog::TileCatalog`], then unwrap it into a
/// [`catalog::UnwrappedCatalog`] of concrete options.
pub use wfc3d_catalog as catalog;

/// Grid and domain model (`wfc3d-grid`).
pub use wfc3d_grid as grid;

/// Solver engine (`wfc3d-engine`).
///
/// [`engine::Generator`] for host-facing use, [`engine::StandardRunner`]
/// for direct access to the state machine.
pub use wfc3d_engine as engine;

/// Common imports for typical wfc3d usage.
///
/// ```rust
/// use wfc3d::prelude::*;
/// ```
pub mod prelude {
    // Geometry and ids
    pub use wfc3d_core::{
        Direction, FacePoint, FacePrototypeId, Rotation3D, TileId, Transform2D, Transform3D,
        TransformSet,
    };

    // Catalog
    pub use wfc3d_catalog::{
        CatalogError, FacePrototype, ImplicitTransformSet, PointSymmetry, Tile, TileCatalog,
        TileFace,
    };

    // Grid
    pub use wfc3d_grid::{Coord, GridError};

    // Engine
    pub use wfc3d_engine::{
        CellStatus, ConfigError, Generator, GeneratorStatus, SolverConfig, SolverError,
        SolverMetrics, TemperatureStats,
    };
}
