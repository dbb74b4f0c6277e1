//! Error types for catalog construction and lookup.

use std::fmt;

use wfc3d_core::{FacePrototypeId, TileId};

/// Errors arising from building, unwrapping, or querying a tile catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no tiles.
    EmptyCatalog,
    /// A tile id is not in the catalog (or was dropped during unwrapping).
    UnknownTile {
        /// The offending id.
        id: TileId,
    },
    /// A face prototype id is not in the catalog.
    UnknownFacePrototype {
        /// The offending id.
        id: FacePrototypeId,
    },
    /// Every tile has an empty supported-transform set, so no option exists.
    NoSupportedTransforms,
    /// Attempted to register a prototype under the reserved null id.
    ReservedFacePrototypeId,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "tile catalog has no tiles"),
            Self::UnknownTile { id } => write!(f, "unknown tile id {id}"),
            Self::UnknownFacePrototype { id } => write!(f, "unknown face prototype id {id}"),
            Self::NoSupportedTransforms => {
                write!(f, "no tile in the catalog supports any orientation")
            }
            Self::ReservedFacePrototypeId => write!(
                f,
                "face prototype id {} is reserved for the null face",
                FacePrototypeId::NULL
            ),
        }
    }
}

impl std::error::Error for CatalogError {}
